//! Client side state machine of the signing and authentication flows.
//!
//! Every operation takes the current [`FlowState`] out of the sequencer, moves it
//! through the transitions and puts the resulting state back. A failed step
//! returns the flow to [`FlowState::CertificatesListed`] so the user can pick a
//! certificate again; a retry always starts with a fresh nonce or token.

use std::sync::Arc;

use signing_core::model::artifact::ArtifactId;
use signing_core::model::token::{Nonce, SignatureToken};
use strum::{Display, EnumDiscriminants};
use tokio::sync::Mutex;
use zeroize::Zeroizing;

use crate::component::{
    CertificateComponent, CertificateListing, DigestAlgorithm, SignDataRequest, Thumbprint,
};
use crate::coordinator::{
    AuthenticationOutcome, AuthenticationSubmission, CoordinatorApi, SignatureOutcome,
};
use crate::error::SequencerError;


#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait UserInterface: Send + Sync {
    fn block(&self);
    fn unblock(&self);
    fn show_error(&self, error: &SequencerError);
}

/// Keeps the UI blocked while alive
struct BlockedUi<'a> {
    ui: &'a dyn UserInterface,
}

impl<'a> BlockedUi<'a> {
    fn new(ui: &'a dyn UserInterface) -> Self {
        ui.block();
        Self { ui }
    }
}

impl Drop for BlockedUi<'_> {
    fn drop(&mut self) {
        self.ui.unblock();
    }
}

#[derive(Debug, Clone)]
pub enum Challenge {
    Nonce(Nonce),
    Token(SignatureToken),
}

#[derive(Debug, Clone)]
pub enum Submission {
    Authentication(AuthenticationSubmission),
    Document(SignatureToken),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    Authentication(AuthenticationOutcome),
    Document(SignatureOutcome),
}

#[derive(Debug, Clone, EnumDiscriminants)]
#[strum_discriminants(name(FlowStateKind), derive(Display))]
pub enum FlowState {
    Idle,
    ComponentReady,
    CertificatesListed {
        certificates: Vec<CertificateListing>,
    },
    AuthStarted {
        certificates: Vec<CertificateListing>,
        thumbprint: Thumbprint,
        challenge: Challenge,
    },
    CertificateRead {
        certificates: Vec<CertificateListing>,
        thumbprint: Thumbprint,
        nonce: Nonce,
        certificate: Vec<u8>,
    },
    Signed {
        certificates: Vec<CertificateListing>,
        submission: Submission,
    },
    Completed {
        certificates: Vec<CertificateListing>,
        outcome: FlowOutcome,
    },
}

impl FlowState {
    fn certificates(&self) -> Option<&Vec<CertificateListing>> {
        match self {
            FlowState::Idle | FlowState::ComponentReady => None,
            FlowState::CertificatesListed { certificates }
            | FlowState::AuthStarted { certificates, .. }
            | FlowState::CertificateRead { certificates, .. }
            | FlowState::Signed { certificates, .. }
            | FlowState::Completed { certificates, .. } => Some(certificates),
        }
    }
}

#[derive(Debug, Clone)]
enum Intent {
    Authentication,
    Document { userfile: Option<ArtifactId> },
}

pub struct Sequencer {
    component: Arc<dyn CertificateComponent>,
    coordinator: Arc<dyn CoordinatorApi>,
    ui: Arc<dyn UserInterface>,
    state: Mutex<FlowState>,
}

impl Sequencer {
    pub fn new(
        component: Arc<dyn CertificateComponent>,
        coordinator: Arc<dyn CoordinatorApi>,
        ui: Arc<dyn UserInterface>,
    ) -> Self {
        Self {
            component,
            coordinator,
            ui,
            state: Mutex::new(FlowState::Idle),
        }
    }

    /// Fails with [`SequencerError::Busy`] while an operation is running
    pub fn state(&self) -> Result<FlowStateKind, SequencerError> {
        let state = self.state.try_lock().map_err(|_| SequencerError::Busy)?;
        Ok(FlowStateKind::from(&*state))
    }

    /// Initializes the certificate component and lists the available certificates
    pub async fn initialize(&self) -> Result<Vec<CertificateListing>, SequencerError> {
        let mut state = self.state.try_lock().map_err(|_| SequencerError::Busy)?;
        let _blocked = BlockedUi::new(self.ui.as_ref());

        self.list_certificates(&mut state)
            .await
            .inspect_err(|error| self.report(error))
    }

    async fn list_certificates(
        &self,
        state: &mut FlowState,
    ) -> Result<Vec<CertificateListing>, SequencerError> {
        if let FlowState::Idle = state {
            self.component.init().await?;
            *state = FlowState::ComponentReady;
        }

        let certificates = self.component.list_certificates().await?;
        tracing::debug!(count = certificates.len(), "Certificates listed");
        *state = FlowState::CertificatesListed {
            certificates: certificates.clone(),
        };
        Ok(certificates)
    }

    pub async fn authenticate(
        &self,
        thumbprint: &Thumbprint,
    ) -> Result<AuthenticationOutcome, SequencerError> {
        match self.run(thumbprint, Intent::Authentication).await? {
            FlowOutcome::Authentication(outcome) => Ok(outcome),
            FlowOutcome::Document(_) => Err(SequencerError::InvalidState(FlowStateKind::Completed)),
        }
    }

    pub async fn sign_document(
        &self,
        thumbprint: &Thumbprint,
        userfile: Option<ArtifactId>,
    ) -> Result<SignatureOutcome, SequencerError> {
        match self.run(thumbprint, Intent::Document { userfile }).await? {
            FlowOutcome::Document(outcome) => Ok(outcome),
            FlowOutcome::Authentication(_) => {
                Err(SequencerError::InvalidState(FlowStateKind::Completed))
            }
        }
    }

    async fn run(
        &self,
        thumbprint: &Thumbprint,
        intent: Intent,
    ) -> Result<FlowOutcome, SequencerError> {
        let mut guard = self.state.try_lock().map_err(|_| SequencerError::Busy)?;
        let _blocked = BlockedUi::new(self.ui.as_ref());

        let Some(certificates) = guard.certificates().cloned() else {
            let error = SequencerError::InvalidState(FlowStateKind::from(&*guard));
            self.report(&error);
            return Err(error);
        };

        let initial = std::mem::replace(
            &mut *guard,
            FlowState::CertificatesListed {
                certificates: certificates.clone(),
            },
        );

        match self.drive(initial, thumbprint, &intent).await {
            Ok(FlowState::Completed {
                certificates,
                outcome,
            }) => {
                *guard = FlowState::Completed {
                    certificates,
                    outcome: outcome.clone(),
                };
                Ok(outcome)
            }
            Ok(state) => {
                let error = SequencerError::InvalidState(FlowStateKind::from(&state));
                self.report(&error);
                Err(error)
            }
            Err(error) => {
                tracing::warn!(%error, "Flow failed, returning to certificate selection");
                self.report(&error);
                Err(error)
            }
        }
    }

    /// Moves the state forward until the flow completes
    async fn drive(
        &self,
        mut state: FlowState,
        thumbprint: &Thumbprint,
        intent: &Intent,
    ) -> Result<FlowState, SequencerError> {
        loop {
            state = match state {
                FlowState::CertificatesListed { certificates }
                | FlowState::Completed { certificates, .. } => {
                    if !certificates
                        .iter()
                        .any(|certificate| &certificate.thumbprint == thumbprint)
                    {
                        return Err(SequencerError::UnknownCertificate(thumbprint.clone()));
                    }

                    let challenge = match intent {
                        Intent::Authentication => {
                            Challenge::Nonce(self.coordinator.start_authentication().await?)
                        }
                        Intent::Document { userfile } => Challenge::Token(
                            self.coordinator.start_signature(userfile.clone()).await?,
                        ),
                    };

                    FlowState::AuthStarted {
                        certificates,
                        thumbprint: thumbprint.clone(),
                        challenge,
                    }
                }
                FlowState::AuthStarted {
                    certificates,
                    thumbprint,
                    challenge: Challenge::Nonce(nonce),
                } => {
                    let certificate = self.component.read_certificate(&thumbprint).await?;
                    FlowState::CertificateRead {
                        certificates,
                        thumbprint,
                        nonce,
                        certificate,
                    }
                }
                FlowState::AuthStarted {
                    certificates,
                    thumbprint,
                    challenge: Challenge::Token(token),
                } => {
                    self.component
                        .sign_with_rest_pki(&token, &thumbprint)
                        .await?;
                    FlowState::Signed {
                        certificates,
                        submission: Submission::Document(token),
                    }
                }
                FlowState::CertificateRead {
                    certificates,
                    thumbprint,
                    nonce,
                    certificate,
                } => {
                    let signature = self
                        .component
                        .sign_data(SignDataRequest {
                            thumbprint,
                            data: Zeroizing::new(nonce.as_bytes().to_vec()),
                            digest_algorithm: DigestAlgorithm::Sha256,
                        })
                        .await?;
                    FlowState::Signed {
                        certificates,
                        submission: Submission::Authentication(AuthenticationSubmission {
                            certificate,
                            nonce,
                            signature,
                        }),
                    }
                }
                FlowState::Signed {
                    certificates,
                    submission,
                } => {
                    let outcome = match submission {
                        Submission::Authentication(submission) => FlowOutcome::Authentication(
                            self.coordinator.complete_authentication(submission).await?,
                        ),
                        Submission::Document(token) => FlowOutcome::Document(
                            self.coordinator.finish_signature(&token).await?,
                        ),
                    };
                    return Ok(FlowState::Completed {
                        certificates,
                        outcome,
                    });
                }
                state @ (FlowState::Idle | FlowState::ComponentReady) => {
                    return Err(SequencerError::InvalidState(FlowStateKind::from(&state)));
                }
            };
        }
    }

    fn report(&self, error: &SequencerError) {
        self.ui.show_error(error);
    }
}
