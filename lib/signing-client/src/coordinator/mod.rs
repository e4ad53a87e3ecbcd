//! Calls from the client to the session coordinator (`signing-server` JSON API)

use async_trait::async_trait;
use serde::Deserialize;
use signing_core::model::artifact::ArtifactId;
use signing_core::model::certificate::CertificateInfo;
use signing_core::model::token::{Nonce, SignatureToken};
use thiserror::Error;

pub mod http;


#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("Coordinator communication error: {0}")]
    Communication(#[source] signing_core::provider::http_client::Error),
    #[error("Coordinator rejected request ({status}, {code}): {message}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
    },
    #[error("Token or nonce is invalid, expired or already used")]
    InvalidToken,
    #[error("Invalid coordinator response: {0}")]
    MappingError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationSubmission {
    pub certificate: Vec<u8>,
    pub nonce: Nonce,
    pub signature: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationOutcome {
    pub success: bool,
    pub message: String,
    /// Human readable validation report of a rejected authentication
    pub validation_results: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignatureOutcome {
    pub filename: ArtifactId,
    pub signer: CertificateInfo,
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CoordinatorApi: Send + Sync {
    /// `userfile` selects a previously uploaded document, the sample is signed otherwise
    async fn start_signature(
        &self,
        userfile: Option<ArtifactId>,
    ) -> Result<SignatureToken, CoordinatorError>;

    async fn finish_signature(
        &self,
        token: &SignatureToken,
    ) -> Result<SignatureOutcome, CoordinatorError>;

    async fn start_authentication(&self) -> Result<Nonce, CoordinatorError>;

    async fn complete_authentication(
        &self,
        submission: AuthenticationSubmission,
    ) -> Result<AuthenticationOutcome, CoordinatorError>;
}
