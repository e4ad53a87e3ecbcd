use thiserror::Error;

use crate::component::{ComponentError, Thumbprint};
use crate::coordinator::CoordinatorError;
use crate::sequencer::FlowStateKind;

#[derive(Debug, Error)]
pub enum SequencerError {
    #[error("Certificate component error: {0}")]
    Component(#[from] ComponentError),
    #[error("Server communication error: {0}")]
    ServerCommunication(CoordinatorError),
    #[error("Token or nonce is invalid, expired or already used")]
    InvalidToken,
    #[error("Another operation is in progress")]
    Busy,
    #[error("Operation not allowed in state {0}")]
    InvalidState(FlowStateKind),
    #[error("Certificate {0} is not among the listed certificates")]
    UnknownCertificate(Thumbprint),
}

impl From<CoordinatorError> for SequencerError {
    fn from(value: CoordinatorError) -> Self {
        match value {
            CoordinatorError::InvalidToken => Self::InvalidToken,
            other => Self::ServerCommunication(other),
        }
    }
}
