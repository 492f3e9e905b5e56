//! The seam between the harness and the network.
//!
//! The crate never opens a connection itself. Callers hand in a
//! [`Transport`] that performs a JSON `POST` and returns status and body;
//! [`HttpClient`] builds the requests, attaches auth and decodes the
//! responses for both services.

use super::completion::{ChatRequest, ChatResponse, CompletionClient};
use super::config::TuningConfig;
use super::detection::{DetectionClient, DetectionRequest, DetectionResponse};
use super::error::{Result, TuningError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A JSON `POST` to send.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPost {
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    pub body: serde_json::Value,
}

/// Raw response from a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonResponse {
    pub status: u16,
    pub body: String,
}

/// Performs JSON `POST`s. Implementations should return `Ok` for any
/// response that arrived, whatever its status.
pub trait Transport {
    fn post_json(&self, request: &JsonPost) -> Result<JsonResponse>;
}

/// Send `body` to `url` and decode a success response into `T`.
/// Non-2xx statuses become [`TuningError::Http`]; there are no retries.
pub(crate) fn post<T, B, X>(transport: &X, url: &str, bearer: Option<&str>, body: &B) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize,
    X: Transport + ?Sized,
{
    let request = JsonPost {
        url: url.to_string(),
        bearer: bearer.map(str::to_string),
        body: serde_json::to_value(body)?,
    };
    let response = transport.post_json(&request)?;
    if !(200..300).contains(&response.status) {
        return Err(TuningError::Http { status: response.status, body: response.body });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Completion and detection client over a caller-supplied [`Transport`].
///
/// Completion calls go to `config.completion_url` with bearer auth;
/// detection calls go to `config.detection_url` with the key in the body.
pub struct HttpClient<'a, X: Transport + ?Sized> {
    transport: &'a X,
    config: &'a TuningConfig,
}

impl<'a, X: Transport + ?Sized> HttpClient<'a, X> {
    pub fn new(transport: &'a X, config: &'a TuningConfig) -> Self {
        HttpClient { transport, config }
    }
}

impl<X: Transport + ?Sized> CompletionClient for HttpClient<'_, X> {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        post(self.transport, &self.config.completion_url, Some(self.config.completion_key.as_str()), request)
    }
}

impl<X: Transport + ?Sized> DetectionClient for HttpClient<'_, X> {
    fn detect(&self, request: &DetectionRequest) -> Result<DetectionResponse> {
        post(self.transport, &self.config.detection_url, None, request)
    }
}
