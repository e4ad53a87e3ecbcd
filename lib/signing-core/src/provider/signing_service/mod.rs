//! Client side of the external signing service (REST PKI).
//!
//! The service owns every cryptographic decision: it issues single-use tokens and
//! nonces, computes PAdES signatures and validates certificates. Single-use
//! enforcement of tokens and nonces happens there as well.

use async_trait::async_trait;

use crate::model::token::{Nonce, SignatureToken};
use crate::model::visual::{PositioningPreset, VisualPositioning};

pub mod dto;
pub mod error;
pub mod rest_pki;

use dto::{
    AuthenticationCompleteRequest, AuthenticationResult, PadesSignatureResult,
    PadesSignatureStartRequest,
};
use error::SigningServiceError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SigningServiceClient: Send + Sync {
    /// Registers a document to be signed, returns the token consumed by the
    /// certificate component and by [`Self::finish_pades_signature`]
    async fn start_pades_signature(
        &self,
        request: PadesSignatureStartRequest,
    ) -> Result<SignatureToken, SigningServiceError>;

    async fn finish_pades_signature(
        &self,
        token: &SignatureToken,
    ) -> Result<PadesSignatureResult, SigningServiceError>;

    async fn get_positioning_preset(
        &self,
        preset: PositioningPreset,
    ) -> Result<VisualPositioning, SigningServiceError>;

    async fn start_authentication(&self) -> Result<Nonce, SigningServiceError>;

    async fn complete_authentication(
        &self,
        request: AuthenticationCompleteRequest,
    ) -> Result<AuthenticationResult, SigningServiceError>;
}
