//! HTTP gateway
//!
//! The `Transport` trait is the seam between services and the wire: the
//! production implementation speaks HTTP via reqwest, tests substitute a
//! mock. `ApiClient` layers envelope decoding on top.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

use super::endpoints::Endpoint;
use super::envelope::Envelope;

/// HTTP method of a backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully prepared backend request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the base URL, with path parameters already substituted
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Request for an endpoint without path parameters
    pub fn from_endpoint(endpoint: &Endpoint) -> Self {
        Self {
            method: endpoint.method,
            path: endpoint.path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Request for an endpoint with its `{id}` path parameter substituted
    pub fn with_id(endpoint: &Endpoint, id: i64) -> Self {
        Self {
            method: endpoint.method,
            path: endpoint.path_with_id(id),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Low-level request executor
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request once and return the decoded JSON body.
    ///
    /// No retries: a failure here is terminal for the user action that
    /// triggered it.
    async fn send(&self, request: ApiRequest) -> AppResult<Value>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(AppError::from)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .query(&request.query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => {
                if status.is_success() {
                    Ok(value)
                } else {
                    // Failed calls still carry an envelope whose message is
                    // the highest-priority text to surface
                    let message = value
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    Err(AppError::Api { message })
                }
            }
            Err(_) if status.is_success() => {
                Err(AppError::Decode(format!("non-JSON response from {url}")))
            }
            Err(_) => Err(AppError::Network(format!("HTTP {status} from {url}"))),
        }
    }
}

/// Successful backend call: the optional envelope message plus decoded data
#[derive(Debug, Clone)]
pub struct ApiSuccess<T> {
    pub message: Option<String>,
    pub data: T,
}

/// Envelope-aware client shared by all services
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client talking HTTP to the configured backend
    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    /// Execute a request and decode `data` into `T`.
    ///
    /// `result == false` becomes `AppError::Api` carrying the envelope
    /// message; absent `data` decodes as JSON null.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<ApiSuccess<T>> {
        let raw = self.transport.send(request).await?;
        let envelope: Envelope = serde_json::from_value(raw)?;
        if !envelope.result {
            return Err(AppError::Api { message: envelope.message });
        }
        let data = serde_json::from_value(envelope.data.unwrap_or(Value::Null))?;
        Ok(ApiSuccess { message: envelope.message, data })
    }

    /// Execute a request whose payload, if any, is irrelevant to the caller
    pub async fn execute_unit(&self, request: ApiRequest) -> AppResult<ApiSuccess<()>> {
        let raw = self.transport.send(request).await?;
        let envelope: Envelope = serde_json::from_value(raw)?;
        if !envelope.result {
            return Err(AppError::Api { message: envelope.message });
        }
        Ok(ApiSuccess { message: envelope.message, data: () })
    }
}
