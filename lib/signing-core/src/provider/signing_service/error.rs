use thiserror::Error;

use crate::model::validation::ValidationResults;
use crate::provider::http_client;

#[derive(Debug, Error)]
pub enum SigningServiceError {
    #[error("Signing service unreachable: {0}")]
    Unreachable(#[source] http_client::Error),
    #[error("Token or nonce is unknown, expired or already used")]
    InvalidToken,
    #[error("Signing service validation failed: {}", .0.summary())]
    Validation(ValidationResults),
    #[error("Signing service rejected request ({status}, {code}): {message}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
    },
    #[error("Invalid signing service response: {0}")]
    MappingError(String),
    #[error("Invalid signing service configuration: {0}")]
    Configuration(String),
}
