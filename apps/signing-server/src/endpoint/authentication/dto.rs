use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::dto::common::CertificateInfoRestDTO;

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct NonceResponseRestDTO {
    /// Base64 encoded single-use challenge
    pub nonce: String,
}

/// Signed challenge, all values Base64 encoded
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub(crate) struct CompleteAuthenticationRequestRestDTO {
    /// DER encoded signer certificate
    pub certificate: String,
    pub nonce: String,
    pub signature: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticationOutcomeRestDTO {
    pub success: bool,
    pub message: String,
    pub certificate: Option<CertificateInfoRestDTO>,
    /// Human readable validation report, present when the certificate or
    /// signature was not accepted
    pub validation_results: Option<String>,
}
