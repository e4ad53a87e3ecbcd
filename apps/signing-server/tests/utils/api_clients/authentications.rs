use serde_json::json;

use crate::utils::api_clients::{HttpClient, Response};

pub struct AuthenticationsApi {
    client: HttpClient,
}

impl AuthenticationsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn start(&self) -> Response {
        self.client.get("/api/authentication/v1").await
    }

    pub async fn complete(&self, certificate: &str, nonce: &str, signature: &str) -> Response {
        self.client
            .post(
                "/api/authentication/v1",
                json!({
                    "certificate": certificate,
                    "nonce": nonce,
                    "signature": signature,
                }),
            )
            .await
    }
}
