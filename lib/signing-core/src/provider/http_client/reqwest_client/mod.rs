use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::{Error, Headers, HttpClient, Method, Request, RequestBuilder, Response, StatusCode};

/// [`HttpClient`] on top of a shared `reqwest` connection pool
#[derive(Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn with_user_agent(user_agent: &str) -> Result<Self, Error> {
        reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map(Self::new)
            .map_err(|e| Error::Setup(e.to_string()))
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), Method::Get, url)
    }

    fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), Method::Post, url)
    }

    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .headers(header_map(&request.headers)?);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        let status = StatusCode(response.status().as_u16());
        // non UTF-8 header values are of no interest to either API
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_owned())))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

fn header_map(headers: &Headers) -> Result<HeaderMap, Error> {
    headers
        .iter()
        .map(|(name, value)| {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidHeader(name.to_owned()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(name.to_owned()))?;
            Ok((header_name, header_value))
        })
        .collect()
}
