//! Server side of the PAdES signing and certificate authentication flows.
//!
//! Issues signature tokens and authentication nonces through the REST PKI
//! signing service and relays the results of the client certificate component.

use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::artifact_storage::{ArtifactStorage, ArtifactStorageError, TempFolderStorage};
use provider::http_client::HttpClient;
use provider::signing_service::SigningServiceClient;
use provider::signing_service::rest_pki::RestPkiClient;
use service::authentication::AuthenticationService;
use service::document::DocumentService;
use service::pades_signature::PadesSignatureService;

pub mod config;
pub mod model;
pub mod provider;
pub mod service;
pub mod util;

#[derive(Clone)]
pub struct SigningCore {
    pub pades_signature_service: PadesSignatureService,
    pub authentication_service: AuthenticationService,
    pub document_service: DocumentService,
    pub config: Arc<CoreConfig>,
}

impl SigningCore {
    /// Wires the services against the REST PKI endpoint from `config`
    pub fn new(
        config: CoreConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self, ArtifactStorageError> {
        let signing_service: Arc<dyn SigningServiceClient> = Arc::new(RestPkiClient::new(
            http_client,
            config.rest_pki.endpoint.clone(),
            config.rest_pki.access_token.clone(),
        ));
        let artifact_storage: Arc<dyn ArtifactStorage> =
            Arc::new(TempFolderStorage::new(config.storage.temp_folder.as_deref())?);

        Ok(Self::with_providers(
            config,
            signing_service,
            artifact_storage,
        ))
    }

    pub fn with_providers(
        config: CoreConfig,
        signing_service: Arc<dyn SigningServiceClient>,
        artifact_storage: Arc<dyn ArtifactStorage>,
    ) -> Self {
        let config = Arc::new(config);

        Self {
            pades_signature_service: PadesSignatureService::new(
                signing_service.clone(),
                artifact_storage.clone(),
                config.clone(),
            ),
            authentication_service: AuthenticationService::new(signing_service, config.clone()),
            document_service: DocumentService::new(artifact_storage, config.clone()),
            config,
        }
    }

    pub fn version() -> Version {
        Version {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            commit: option_env!("CI_COMMIT_SHA").map(ToOwned::to_owned),
            pipeline_id: option_env!("CI_PIPELINE_ID").map(ToOwned::to_owned),
        }
    }
}

pub struct Version {
    pub version: String,
    pub commit: Option<String>,
    pub pipeline_id: Option<String>,
}
