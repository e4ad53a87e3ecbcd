use thiserror::Error;

use crate::model::artifact::{ArtifactId, ArtifactIdError};
use crate::model::validation::ValidationResults;
use crate::model::visual::PositioningError;
use crate::provider::artifact_storage::ArtifactStorageError;
use crate::provider::signing_service::error::SigningServiceError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),
    #[error("Token or nonce is unknown, expired or already used")]
    InvalidToken,

    #[error("Signing service error: `{0}`")]
    SigningService(SigningServiceError),
    #[error("Artifact storage error: `{0}`")]
    ArtifactStorage(#[from] ArtifactStorageError),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Artifact `{0}` not found")]
    Artifact(ArtifactId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Document is empty")]
    EmptyDocument,
    #[error("Document size {size} exceeds the limit of {max} bytes")]
    DocumentTooLarge { size: usize, max: usize },
    #[error("Upload exceeds the limit of {max} bytes")]
    UploadTooLarge { max: usize },
    #[error("Document is not a PDF file")]
    UnsupportedDocumentType,
    #[error("Invalid signature positioning: `{0}`")]
    InvalidPositioning(#[from] PositioningError),
    #[error("Invalid artifact id: `{0}`")]
    InvalidArtifactId(#[from] ArtifactIdError),
    #[error("Missing value: `{0}`")]
    MissingValue(&'static str),
}

impl From<SigningServiceError> for ServiceError {
    fn from(value: SigningServiceError) -> Self {
        match value {
            SigningServiceError::InvalidToken => Self::InvalidToken,
            other => Self::SigningService(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0011,
    BR_0012,
    BR_0013,
    BR_0084,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error code",
            ErrorCode::BR_0001 => "Artifact not found",
            ErrorCode::BR_0002 => "Token or nonce is invalid, expired or already used",
            ErrorCode::BR_0003 => "Signing service unreachable",
            ErrorCode::BR_0004 => "Signing service rejected the request",
            ErrorCode::BR_0005 => "Signature validation failed",
            ErrorCode::BR_0006 => "Invalid signing service response",
            ErrorCode::BR_0007 => "Empty document",
            ErrorCode::BR_0008 => "Document too large",
            ErrorCode::BR_0009 => "Invalid signature positioning",
            ErrorCode::BR_0010 => "Invalid artifact identifier",
            ErrorCode::BR_0011 => "Unsupported document type",
            ErrorCode::BR_0012 => "Artifact storage error",
            ErrorCode::BR_0013 => "Missing value",
            ErrorCode::BR_0084 => "General input validation error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::InvalidToken => ErrorCode::BR_0002,
            ServiceError::SigningService(error) => error.error_code(),
            ServiceError::ArtifactStorage(error) => error.error_code(),
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::BR_0000,
        }
    }

    /// Validation report attached to the failure, when the signing service provided one
    pub fn validation_results(&self) -> Option<&ValidationResults> {
        match self {
            ServiceError::SigningService(SigningServiceError::Validation(results)) => Some(results),
            _ => None,
        }
    }
}

impl SigningServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SigningServiceError::Unreachable(_) => ErrorCode::BR_0003,
            SigningServiceError::InvalidToken => ErrorCode::BR_0002,
            SigningServiceError::Validation(_) => ErrorCode::BR_0005,
            SigningServiceError::Rejected { .. } => ErrorCode::BR_0004,
            SigningServiceError::MappingError(_) => ErrorCode::BR_0006,
            SigningServiceError::Configuration(_) => ErrorCode::BR_0000,
        }
    }
}

impl ArtifactStorageError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ArtifactStorageError::Io(_) => ErrorCode::BR_0012,
            ArtifactStorageError::InvalidId(_) => ErrorCode::BR_0010,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Artifact(_) => ErrorCode::BR_0001,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyDocument => ErrorCode::BR_0007,
            ValidationError::DocumentTooLarge { .. } | ValidationError::UploadTooLarge { .. } => {
                ErrorCode::BR_0008
            }
            ValidationError::UnsupportedDocumentType => ErrorCode::BR_0011,
            ValidationError::InvalidPositioning(_) => ErrorCode::BR_0009,
            ValidationError::InvalidArtifactId(_) => ErrorCode::BR_0010,
            ValidationError::MissingValue(_) => ErrorCode::BR_0013,
        }
    }
}
