use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::signing_service::SigningServiceClient;

pub mod dto;
pub mod service;


#[derive(Clone)]
pub struct AuthenticationService {
    signing_service: Arc<dyn SigningServiceClient>,
    config: Arc<CoreConfig>,
}

impl AuthenticationService {
    pub(crate) fn new(signing_service: Arc<dyn SigningServiceClient>, config: Arc<CoreConfig>) -> Self {
        Self {
            signing_service,
            config,
        }
    }
}
