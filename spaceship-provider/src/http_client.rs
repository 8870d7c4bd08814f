//! Shared HTTP plumbing for the Spaceship client
//!
//! Every gateway operation goes through [`HttpUtils::execute`] and
//! [`HttpUtils::parse_json`], so upstream failures are normalized into
//! [`UpstreamError`] in exactly one place.
//!
//! # Error normalization
//! - send / body read failure -> [`UpstreamError::Transport`] with the client's message
//! - non-2xx status -> [`UpstreamError::Rejected`] with the API's own diagnostic when present
//! - malformed 2xx body -> [`UpstreamError::Decode`]

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{Result, UpstreamError};
use crate::types::OperationHandle;
use crate::utils::log_sanitizer::truncate_for_log;

/// Default connection timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Header carrying the id of an operation the registrar accepted for async processing.
pub(crate) const ASYNC_OPERATION_HEADER: &str = "spaceship-async-operationid";

/// Body fields the API uses for human-readable error details, in preference order.
const ERROR_MESSAGE_FIELDS: [&str; 3] = ["message", "detail", "error"];

/// Create an HTTP client with timeout configuration.
pub(crate) fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| UpstreamError::Transport {
            message: format!("Failed to create HTTP client: {e}"),
        })
}

/// A successful (2xx) upstream response.
#[derive(Debug)]
pub(crate) struct UpstreamResponse {
    /// Value of [`ASYNC_OPERATION_HEADER`], if the API sent one.
    pub async_operation_id: Option<String>,
    pub body: String,
}

impl UpstreamResponse {
    /// Decode the body as `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        HttpUtils::parse_json(&self.body)
    }

    /// Extract the handle of an accepted async operation.
    ///
    /// The header wins; otherwise the body must be `{"operationId": ...}`.
    pub fn operation_handle(&self) -> Result<OperationHandle> {
        match &self.async_operation_id {
            Some(id) => Ok(OperationHandle {
                operation_id: id.clone(),
            }),
            None => self.json(),
        }
    }
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Send a request and normalize the outcome.
    ///
    /// # Arguments
    /// * `request_builder` - fully configured request (URL, headers, body)
    /// * `method_name` - HTTP method, for logging
    /// * `path` - API path, for logging
    ///
    /// # Returns
    /// * `Ok(UpstreamResponse)` - 2xx status
    /// * `Err(UpstreamError::Rejected)` - any other status
    /// * `Err(UpstreamError::Transport)` - no response obtained
    pub async fn execute(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<UpstreamResponse> {
        log::debug!("[spaceship] {method_name} {path}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        log::debug!("[spaceship] Response Status: {status}");

        // Read headers before the body consumes the response
        let async_operation_id = response
            .headers()
            .get(ASYNC_OPERATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport {
                message: format!("Failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            let code = status.as_u16();
            let message = extract_error_message(&body).unwrap_or_else(|| format!("HTTP {code}"));
            log::warn!("[spaceship] {method_name} {path} rejected (HTTP {code}): {message}");
            return Err(UpstreamError::Rejected {
                status: code,
                message,
            });
        }

        log::debug!("[spaceship] Response Body: {}", truncate_for_log(&body));

        Ok(UpstreamResponse {
            async_operation_id,
            body,
        })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(UpstreamError::Decode)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[spaceship] JSON parse failed: {e}");
            log::error!("[spaceship] Raw response: {}", truncate_for_log(response_text));
            UpstreamError::Decode {
                message: format!("Unexpected response from Spaceship API: {e}"),
            }
        })
    }
}

/// Pull the API's diagnostic out of an error body.
///
/// Returns `None` for non-JSON bodies or when no known field carries a non-empty string.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ERROR_MESSAGE_FIELDS
        .iter()
        .filter_map(|field| value.get(field).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}
