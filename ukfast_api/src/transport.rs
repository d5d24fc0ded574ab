//! The transport seam: something that can send an [`ApiRequest`] and hand back
//! the raw response. [`HttpTransport`] is the reqwest-backed implementation;
//! tests substitute their own.

use std::fmt;

use async_trait::async_trait;
use url::Url;

use crate::{
    config::ClientConfig,
    errors::{TransportError, TransportErrorKind},
    request::ClientRequestParameters,
    types::RawResponse,
    Error,
};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        write!(f, "{}", s)
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request described as plain data, relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub parameters: Option<ClientRequestParameters>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            parameters: None,
            body: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Option<ClientRequestParameters>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends requests on behalf of [`Client`](crate::Client).
///
/// Implementations report connectivity, timeout and cancellation failures as
/// [`TransportError`]. Non-success HTTP statuses are *not* errors at this
/// layer; they come back as a [`RawResponse`] for the client to interpret.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_request(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed [`Transport`].
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Builds the HTTP client after validating `config`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                TransportError::from(e)
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url(&self, path: &str, parameters: Option<&ClientRequestParameters>) -> Result<Url, TransportError> {
        let url = Url::parse(format!("{}{}", &self.config.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            TransportError::new(TransportErrorKind::Other, format!("invalid URL: {}", e))
        })?;
        Ok(match parameters {
            Some(parameters) => parameters.add_to_url(&url),
            None => url,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_request(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.get_url(&request.path, request.parameters.as_ref())?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .header("authorization", self.config.api_key.as_str())
            .header("accept", "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            TransportError::from(e)
        })?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            TransportError::from(e)
        })?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
