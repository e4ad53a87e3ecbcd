//! REST PKI implementation of [`super::SigningServiceClient`]

use std::sync::Arc;

use secrecy::SecretString;
use url::Url;

use crate::provider::http_client::HttpClient;

mod dto;
mod provider;


/// Error codes reported for tokens and nonces the service no longer accepts
const INVALID_TOKEN_CODES: [&str; 5] = [
    "TokenNotFound",
    "TokenAlreadyUsed",
    "TokenExpired",
    "NonceNotFound",
    "NonceAlreadyUsed",
];

const VALIDATION_ERROR_CODE: &str = "ValidationError";

pub struct RestPkiClient {
    http_client: Arc<dyn HttpClient>,
    endpoint: Url,
    access_token: SecretString,
}

impl RestPkiClient {
    pub fn new(http_client: Arc<dyn HttpClient>, endpoint: Url, access_token: SecretString) -> Self {
        let mut endpoint = endpoint;
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Self {
            http_client,
            endpoint,
            access_token,
        }
    }
}
