use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use self::authentications::AuthenticationsApi;
use self::documents::DocumentsApi;
use self::other::OtherApi;
use self::pades_signatures::PadesSignaturesApi;

pub mod authentications;
pub mod documents;
pub mod other;
pub mod pades_signatures;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap()
    })
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub async fn get(&self, url: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().get(url).send().await.unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().post(url).form(form).send().await.unwrap();

        Response { resp }
    }

    pub async fn post_multipart(&self, url: &str, form: reqwest::multipart::Form) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .multipart(form)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.resp
            .headers()
            .get(name)
            .map(|value| value.to_str().unwrap().to_owned())
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }

    pub async fn bytes(self) -> Vec<u8> {
        self.resp.bytes().await.unwrap().to_vec()
    }
}

pub struct Client {
    pub pades_signatures: PadesSignaturesApi,
    pub authentications: AuthenticationsApi,
    pub documents: DocumentsApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let client = HttpClient { base_url };

        Self {
            pades_signatures: PadesSignaturesApi::new(client.clone()),
            authentications: AuthenticationsApi::new(client.clone()),
            documents: DocumentsApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
