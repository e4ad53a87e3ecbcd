use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::artifact_storage::ArtifactStorage;
use crate::provider::signing_service::SigningServiceClient;

pub mod dto;
pub mod service;


#[derive(Clone)]
pub struct PadesSignatureService {
    signing_service: Arc<dyn SigningServiceClient>,
    artifact_storage: Arc<dyn ArtifactStorage>,
    config: Arc<CoreConfig>,
}

impl PadesSignatureService {
    pub(crate) fn new(
        signing_service: Arc<dyn SigningServiceClient>,
        artifact_storage: Arc<dyn ArtifactStorage>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            signing_service,
            artifact_storage,
            config,
        }
    }
}
