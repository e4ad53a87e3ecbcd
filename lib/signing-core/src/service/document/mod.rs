use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::artifact_storage::ArtifactStorage;

pub mod dto;
pub mod service;


/// Uploads of documents to sign and downloads of signed artifacts
#[derive(Clone)]
pub struct DocumentService {
    artifact_storage: Arc<dyn ArtifactStorage>,
    config: Arc<CoreConfig>,
}

impl DocumentService {
    pub(crate) fn new(artifact_storage: Arc<dyn ArtifactStorage>, config: Arc<CoreConfig>) -> Self {
        Self {
            artifact_storage,
            config,
        }
    }
}
