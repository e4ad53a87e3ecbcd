use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use signing_core::model::artifact::ArtifactId;
use signing_core::model::token::{Nonce, SignatureToken};
use signing_core::provider::http_client::{HttpClient, RequestBuilder, Response};
use signing_core::util::base64;
use url::Url;

use super::{
    AuthenticationOutcome, AuthenticationSubmission, CoordinatorApi, CoordinatorError,
    SignatureOutcome,
};

const PADES_SIGNATURE_PATH: &str = "api/pades-signature/v1";
const AUTHENTICATION_PATH: &str = "api/authentication/v1";
const INVALID_TOKEN_CODE: &str = "BR_0002";

/// [`CoordinatorApi`] over the coordinator's JSON endpoints
pub struct HttpCoordinatorApi {
    http_client: Arc<dyn HttpClient>,
    base_url: Url,
}

impl HttpCoordinatorApi {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: Url) -> Self {
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http_client,
            base_url,
        }
    }

    fn url(&self, path: &str) -> Result<String, CoordinatorError> {
        self.base_url
            .join(path)
            .map(String::from)
            .map_err(|e| CoordinatorError::MappingError(e.to_string()))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, CoordinatorError> {
        let response = request
            .send()
            .await
            .map_err(CoordinatorError::Communication)?;

        check_response(response)?
            .json()
            .map_err(|e| CoordinatorError::MappingError(e.to_string()))
    }
}

#[derive(Serialize)]
struct StartSignatureQuery {
    userfile: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: SignatureToken,
}

#[derive(Serialize)]
struct FinishSignatureRequest<'a> {
    token: &'a SignatureToken,
}

#[derive(Deserialize)]
struct NonceResponse {
    nonce: Nonce,
}

#[derive(Serialize)]
struct CompleteAuthenticationRequest {
    #[serde(with = "base64")]
    certificate: Vec<u8>,
    nonce: Nonce,
    #[serde(with = "base64")]
    signature: Vec<u8>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    code: Option<String>,
    message: Option<String>,
}

#[async_trait::async_trait]
impl CoordinatorApi for HttpCoordinatorApi {
    async fn start_signature(
        &self,
        userfile: Option<ArtifactId>,
    ) -> Result<SignatureToken, CoordinatorError> {
        let request = self
            .http_client
            .get(&self.url(PADES_SIGNATURE_PATH)?)
            .query(StartSignatureQuery {
                userfile: userfile.map(|id| id.to_string()),
            })
            .map_err(|e| CoordinatorError::MappingError(e.to_string()))?;

        let response: TokenResponse = self.send(request).await?;
        Ok(response.token)
    }

    async fn finish_signature(
        &self,
        token: &SignatureToken,
    ) -> Result<SignatureOutcome, CoordinatorError> {
        let request = self
            .http_client
            .post(&self.url(PADES_SIGNATURE_PATH)?)
            .json(FinishSignatureRequest { token })
            .map_err(|e| CoordinatorError::MappingError(e.to_string()))?;

        self.send(request).await
    }

    async fn start_authentication(&self) -> Result<Nonce, CoordinatorError> {
        let request = self.http_client.get(&self.url(AUTHENTICATION_PATH)?);

        let response: NonceResponse = self.send(request).await?;
        Ok(response.nonce)
    }

    async fn complete_authentication(
        &self,
        submission: AuthenticationSubmission,
    ) -> Result<AuthenticationOutcome, CoordinatorError> {
        let request = self
            .http_client
            .post(&self.url(AUTHENTICATION_PATH)?)
            .json(CompleteAuthenticationRequest {
                certificate: submission.certificate,
                nonce: submission.nonce,
                signature: submission.signature,
            })
            .map_err(|e| CoordinatorError::MappingError(e.to_string()))?;

        self.send(request).await
    }
}

fn check_response(response: Response) -> Result<Response, CoordinatorError> {
    if response.status.is_success() {
        return Ok(response);
    }

    let status = response.status.0;
    let error: ErrorResponse = serde_json::from_slice(&response.body).unwrap_or_default();
    let code = error.code.unwrap_or_default();
    if code == INVALID_TOKEN_CODE {
        return Err(CoordinatorError::InvalidToken);
    }

    Err(CoordinatorError::Rejected {
        status,
        code,
        message: error.message.unwrap_or_else(|| format!("HTTP {status}")),
    })
}
