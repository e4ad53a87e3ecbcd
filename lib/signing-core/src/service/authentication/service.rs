use super::AuthenticationService;
use super::dto::{AuthenticationOutcomeDTO, CompleteAuthenticationRequestDTO};
use crate::model::token::Nonce;
use crate::model::validation::ValidationResults;
use crate::provider::signing_service::dto::AuthenticationCompleteRequest;
use crate::provider::signing_service::error::SigningServiceError;
use crate::service::error::{ServiceError, ValidationError};

impl AuthenticationService {
    /// Requests a fresh challenge for the certificate component to sign
    pub async fn start(&self) -> Result<Nonce, ServiceError> {
        let nonce = self.signing_service.start_authentication().await?;
        tracing::info!("Authentication started");
        Ok(nonce)
    }

    /// Submits the signed challenge to the signing service.
    ///
    /// A certificate the service does not trust is reported as an unsuccessful
    /// outcome carrying the validation report, not as an error.
    pub async fn complete(
        &self,
        request: CompleteAuthenticationRequestDTO,
    ) -> Result<AuthenticationOutcomeDTO, ServiceError> {
        if request.certificate.is_empty() {
            return Err(ValidationError::MissingValue("certificate").into());
        }
        if request.signature.is_empty() {
            return Err(ValidationError::MissingValue("signature").into());
        }

        let result = self
            .signing_service
            .complete_authentication(AuthenticationCompleteRequest {
                nonce: request.nonce,
                certificate: request.certificate,
                signature: request.signature,
                security_context_id: self.config.authentication.security_context_id,
            })
            .await;

        let result = match result {
            Ok(result) => result,
            Err(SigningServiceError::Validation(validation_results)) => {
                return Ok(failed_outcome(validation_results));
            }
            Err(error) => return Err(error.into()),
        };

        if !result.validation_results.is_valid() {
            return Ok(failed_outcome(result.validation_results));
        }

        let certificate = result.certificate.ok_or_else(|| {
            ServiceError::MappingError("certificate missing from successful authentication".to_string())
        })?;

        tracing::info!(subject = %certificate.subject_name, "Authentication successful");

        Ok(AuthenticationOutcomeDTO {
            success: true,
            message: format!(
                "Authentication successful: {} (issued by {})",
                certificate.subject_name, certificate.issuer_name
            ),
            certificate: Some(certificate),
            validation_results: None,
        })
    }
}

fn failed_outcome(validation_results: ValidationResults) -> AuthenticationOutcomeDTO {
    tracing::info!(report = %validation_results.summary(), "Authentication failed");

    let message = match validation_results.errors.first() {
        Some(error) => format!("Authentication failed: {}", error.message),
        None => "Authentication failed".to_string(),
    };

    AuthenticationOutcomeDTO {
        success: false,
        message,
        certificate: None,
        validation_results: Some(validation_results),
    }
}
