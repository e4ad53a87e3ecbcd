use serde_json::{Value, json};

use crate::utils::api_clients::{HttpClient, Response};

pub struct PadesSignaturesApi {
    client: HttpClient,
}

impl PadesSignaturesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn start(&self, userfile: Option<&str>) -> Response {
        match userfile {
            Some(userfile) => {
                self.client
                    .get(&format!("/api/pades-signature/v1?userfile={userfile}"))
                    .await
            }
            None => self.client.get("/api/pades-signature/v1").await,
        }
    }

    pub async fn finish(&self, token: &str) -> Response {
        self.client
            .post("/api/pades-signature/v1", json!({ "token": token }))
            .await
    }

    pub async fn finish_raw(&self, body: Value) -> Response {
        self.client.post("/api/pades-signature/v1", body).await
    }

    pub async fn signature_page(&self) -> Response {
        self.client.get("/pades-signature").await
    }

    pub async fn submit_signature_page(&self, token: &str) -> Response {
        self.client
            .post_form("/pades-signature", &[("token", token)])
            .await
    }
}
