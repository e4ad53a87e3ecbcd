use reqwest::multipart::{Form, Part};

use crate::utils::api_clients::{HttpClient, Response};

pub struct DocumentsApi {
    client: HttpClient,
}

impl DocumentsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn upload(&self, content: Vec<u8>) -> Response {
        let form = Form::new().part("userfile", Part::bytes(content).file_name("document.pdf"));
        self.client.post_multipart("/upload", form).await
    }

    pub async fn upload_without_file(&self) -> Response {
        let form = Form::new().text("comment", "no file attached");
        self.client.post_multipart("/upload", form).await
    }

    pub async fn download(&self, id: &str) -> Response {
        self.client.get(&format!("/download/{id}")).await
    }
}
