//! Transport seam shared by the signing service client and the coordinator API client.
//!
//! Requests are assembled with [`RequestBuilder`] and executed by an [`HttpClient`]
//! implementation. Every exchange is logged with credentials redacted and large
//! bodies (Base64 encoded documents) shortened.

pub mod reqwest_client;

use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::Arc;

use itertools::Itertools;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::Display;
use thiserror::Error;


#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> RequestBuilder;
    fn post(&self, url: &str) -> RequestBuilder;

    async fn execute(&self, request: Request) -> Result<Response, Error>;
}

/// Header names are kept as given, ordering keeps the logs stable
pub type Headers = BTreeMap<String, String>;

const REDACTED_HEADERS: [&str; 2] = ["authorization", "cookie"];
const MAX_LOGGED_BODY_CHARS: usize = 512;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Query encoding error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),
    #[error("Invalid header `{0}`")]
    InvalidHeader(String),
    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    request: Request,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: &str) -> Self {
        Self {
            client,
            request: Request {
                method,
                url: url.to_owned(),
                headers: Headers::new(),
                body: None,
            },
        }
    }

    pub fn bearer_auth(mut self, token: &str) -> Self {
        self.request
            .headers
            .insert("Authorization".to_owned(), format!("Bearer {token}"));
        self
    }

    /// Appends the url-encoded `value`, `None` fields are left out
    pub fn query<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        let query = serde_urlencoded::to_string(value)?;
        if !query.is_empty() {
            let separator = if self.request.url.contains('?') { '&' } else { '?' };
            self.request.url = format!("{}{separator}{query}", self.request.url);
        }
        Ok(self)
    }

    pub fn json<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        self.request.body = Some(serde_json::to_vec(&value)?);
        self.request
            .headers
            .insert("Content-Type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, Error> {
        let Self { client, request } = self;
        let exchange = format!("{} {}", request.method, request.url);

        tracing::trace!(
            %exchange,
            headers = %format_headers(&request.headers),
            body = %format_body(request.body.as_deref()),
            "HTTP request"
        );

        match client.execute(request).await {
            Ok(response) => {
                tracing::debug!(%exchange, status = %response.status, "HTTP response");
                tracing::trace!(
                    %exchange,
                    headers = %format_headers(&response.headers),
                    body = %format_body(Some(response.body.as_slice())),
                    "HTTP response"
                );
                Ok(response)
            }
            Err(error) => {
                tracing::warn!(%exchange, %error, "HTTP request failed");
                Err(error)
            }
        }
    }
}

fn format_headers(headers: &Headers) -> String {
    if headers.is_empty() {
        return "<None>".to_owned();
    }

    headers
        .iter()
        .map(|(name, value)| {
            if REDACTED_HEADERS.contains(&name.to_ascii_lowercase().as_str()) {
                format!("{name}: <redacted>")
            } else {
                format!("{name}: {value}")
            }
        })
        .join("\n")
}

fn format_body(body: Option<&[u8]>) -> String {
    let Some(body) = body else {
        return "<None>".to_owned();
    };

    match std::str::from_utf8(body) {
        Ok(text) if text.chars().count() > MAX_LOGGED_BODY_CHARS => {
            let shortened: String = text.chars().take(MAX_LOGGED_BODY_CHARS).collect();
            format!("{shortened}... <{} bytes total>", body.len())
        }
        Ok(text) => text.to_owned(),
        Err(_) => format!("<{} bytes of binary data>", body.len()),
    }
}
