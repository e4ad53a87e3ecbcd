//! Seam to the local certificate access component (browser extension or native
//! helper) that owns the user's certificates and private keys.

use std::fmt::Display;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use signing_core::model::token::SignatureToken;
use strum::Display;
use thiserror::Error;
use time::OffsetDateTime;
use zeroize::Zeroizing;

/// Client-local certificate identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thumbprint(String);

impl Thumbprint {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Thumbprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateListing {
    pub thumbprint: Thumbprint,
    pub subject_name: String,
    pub issuer_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub validity_end: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DigestAlgorithm {
    #[strum(serialize = "SHA-256")]
    Sha256,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignDataRequest {
    pub thumbprint: Thumbprint,
    pub data: Zeroizing<Vec<u8>>,
    pub digest_algorithm: DigestAlgorithm,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComponentError {
    #[error("Certificate component is not installed")]
    NotInstalled,
    #[error("Operation cancelled by the user")]
    Cancelled,
    #[error("Certificate component failure ({code}): {message}")]
    Failure { code: String, message: String },
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CertificateComponent: Send + Sync {
    async fn init(&self) -> Result<(), ComponentError>;

    async fn list_certificates(&self) -> Result<Vec<CertificateListing>, ComponentError>;

    /// DER encoding of the certificate
    async fn read_certificate(&self, thumbprint: &Thumbprint) -> Result<Vec<u8>, ComponentError>;

    async fn sign_data(&self, request: SignDataRequest) -> Result<Vec<u8>, ComponentError>;

    /// Signs the document registered under `token` directly with the signing service
    async fn sign_with_rest_pki(
        &self,
        token: &SignatureToken,
        thumbprint: &Thumbprint,
    ) -> Result<(), ComponentError>;
}
