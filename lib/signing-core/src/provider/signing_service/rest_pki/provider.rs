use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use url::Url;

use super::dto::{
    AuthenticationCompleteRequestRestDTO, AuthenticationCompleteResponseRestDTO, ErrorRestDTO,
    NonceResponseRestDTO, PadesSignatureFinalizeResponseRestDTO,
    PadesSignaturePostRequestRestDTO, TokenResponseRestDTO, VisualPositioningRestDTO,
};
use super::{INVALID_TOKEN_CODES, RestPkiClient, VALIDATION_ERROR_CODE};
use crate::model::token::{Nonce, SignatureToken};
use crate::model::validation::ValidationItem;
use crate::model::visual::{PositioningPreset, VisualPositioning};
use crate::provider::http_client::{self, RequestBuilder, Response};
use crate::provider::signing_service::SigningServiceClient;
use crate::provider::signing_service::dto::{
    AuthenticationCompleteRequest, AuthenticationResult, PadesSignatureResult,
    PadesSignatureStartRequest,
};
use crate::provider::signing_service::error::SigningServiceError;

#[async_trait::async_trait]
impl SigningServiceClient for RestPkiClient {
    async fn start_pades_signature(
        &self,
        request: PadesSignatureStartRequest,
    ) -> Result<SignatureToken, SigningServiceError> {
        let body = PadesSignaturePostRequestRestDTO::from(request);
        let request = self
            .post("Api/PadesSignatures")?
            .json(body)
            .map_err(|e| SigningServiceError::MappingError(e.to_string()))?;

        let response: TokenResponseRestDTO = self.send(request, Consumes::Nothing).await?;
        tracing::debug!(token = ?response.token, "PAdES signature started");
        Ok(response.token)
    }

    async fn finish_pades_signature(
        &self,
        token: &SignatureToken,
    ) -> Result<PadesSignatureResult, SigningServiceError> {
        let request = self.post(&format!("Api/PadesSignatures/{token}/Finalize"))?;

        let response: PadesSignatureFinalizeResponseRestDTO =
            self.send(request, Consumes::Token).await?;
        Ok(PadesSignatureResult {
            signed_pdf: response.signed_pdf,
            certificate: response.certificate.into(),
        })
    }

    async fn get_positioning_preset(
        &self,
        preset: PositioningPreset,
    ) -> Result<VisualPositioning, SigningServiceError> {
        let request = self.get(&format!("Api/PadesVisualPositioningPresets/{preset}"))?;

        let response: VisualPositioningRestDTO = self.send(request, Consumes::Nothing).await?;
        response.try_into()
    }

    async fn start_authentication(&self) -> Result<Nonce, SigningServiceError> {
        let request = self.post("Api/Authentications/Nonces")?;

        let response: NonceResponseRestDTO = self.send(request, Consumes::Nothing).await?;
        Ok(response.nonce)
    }

    async fn complete_authentication(
        &self,
        request: AuthenticationCompleteRequest,
    ) -> Result<AuthenticationResult, SigningServiceError> {
        let body = AuthenticationCompleteRequestRestDTO::from(request);
        let request = self
            .post("Api/Authentications/Nonces/Complete")?
            .json(body)
            .map_err(|e| SigningServiceError::MappingError(e.to_string()))?;

        let response: AuthenticationCompleteResponseRestDTO =
            self.send(request, Consumes::Token).await?;
        Ok(AuthenticationResult {
            certificate: response.certificate.map(Into::into),
            validation_results: response.validation_results,
        })
    }
}

impl RestPkiClient {
    fn url(&self, path: &str) -> Result<Url, SigningServiceError> {
        self.endpoint
            .join(path)
            .map_err(|e| SigningServiceError::Configuration(format!("invalid endpoint url: {e}")))
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, SigningServiceError> {
        Ok(self
            .http_client
            .get(self.url(path)?.as_str())
            .bearer_auth(self.access_token.expose_secret()))
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, SigningServiceError> {
        Ok(self
            .http_client
            .post(self.url(path)?.as_str())
            .bearer_auth(self.access_token.expose_secret()))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        consumes: Consumes,
    ) -> Result<T, SigningServiceError> {
        let response = request
            .send()
            .await
            .map_err(SigningServiceError::Unreachable)?;

        check_response(response, consumes)?
            .json()
            .map_err(|e: http_client::Error| SigningServiceError::MappingError(e.to_string()))
    }
}

/// Whether the call redeems a previously issued token or nonce
#[derive(Clone, Copy, PartialEq, Eq)]
enum Consumes {
    Nothing,
    Token,
}

fn check_response(
    response: Response,
    consumes: Consumes,
) -> Result<Response, SigningServiceError> {
    if response.status.is_success() {
        return Ok(response);
    }

    let status = response.status.0;
    let error: ErrorRestDTO = serde_json::from_slice(&response.body).unwrap_or_default();
    tracing::warn!(
        status,
        code = error.code.as_deref().unwrap_or_default(),
        message = error.message.as_deref().unwrap_or_default(),
        "Signing service returned an error"
    );

    let code = error.code.unwrap_or_default();
    // a missing route on a token-less call is a rejection, not a consumed token
    if consumes == Consumes::Token
        && (status == 404 || status == 410 || INVALID_TOKEN_CODES.contains(&code.as_str()))
    {
        return Err(SigningServiceError::InvalidToken);
    }

    if code == VALIDATION_ERROR_CODE {
        let mut validation_results = error.validation_results.unwrap_or_default();
        if validation_results.is_valid() {
            validation_results.errors.push(ValidationItem {
                item_type: code,
                message: error
                    .message
                    .unwrap_or_else(|| "Validation failed".to_string()),
                detail: error.detail,
                inner_validation_results: None,
            });
        }
        return Err(SigningServiceError::Validation(validation_results));
    }

    let message = match (error.message, error.detail) {
        (Some(message), Some(detail)) => format!("{message} ({detail})"),
        (Some(message), None) => message,
        (None, Some(detail)) => detail,
        (None, None) => format!("HTTP {status}"),
    };

    Err(SigningServiceError::Rejected {
        status,
        code: if code.is_empty() {
            "Unknown".to_string()
        } else {
            code
        },
        message,
    })
}
