//! HTTP client for submitting the contact form.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client maps transport and status failures
//! into [`SubmitError`] so the form never has to deal with raw `ureq` errors.

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, AsyncContactClientImpl};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::{Metrics, SubmitTimer};
use crate::models::{ConfirmationResult, SubmissionPayload};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Path of the contact endpoint relative to the base URL.
pub const CONTACTS_PATH: &str = "/api/contacts";

/// HTTP client for the contact endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactClient {
    /// Base URL of the site serving the endpoint
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactClient {
    /// Create a new ContactClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(config.endpoint_url.clone(), config.timeout())
    }

    /// Create a ContactClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::build(base_url.into(), Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Post the payload to the contact endpoint and parse the confirmation.
    pub fn submit(&self, payload: &SubmissionPayload) -> SubmitResult<ConfirmationResult> {
        let timer = SubmitTimer::new(self.metrics.clone());
        let url = self.build_url(CONTACTS_PATH);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(payload)
            .map_err(|e| self.map_error(e))
            .and_then(|response| {
                let body = response
                    .into_string()
                    .map_err(|e| SubmitError::HttpError(e.to_string()))?;
                serde_json::from_str::<ConfirmationResult>(&body).map_err(SubmitError::JsonError)
            });

        match &result {
            Ok(_) => {
                tracing::debug!("POST {} - Success", url);
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a SubmitError.
    fn map_error(&self, error: ureq::Error) -> SubmitError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                // A `{message}` body is meant for the user whatever the status
                match serde_json::from_str::<ConfirmationResult>(&body) {
                    Ok(confirmation) => SubmitError::Rejected {
                        status,
                        message: confirmation.message,
                    },
                    Err(_) => SubmitError::ApiError {
                        status,
                        message: body,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmitError::HttpError("Connection failed".to_string())
                } else if Self::is_timeout(&transport) {
                    SubmitError::Timeout
                } else {
                    SubmitError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Whether a transport error was caused by the configured timeout elapsing.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        use std::error::Error as _;

        transport.kind() == ureq::ErrorKind::Io
            && transport
                .source()
                .and_then(|e| e.downcast_ref::<io::Error>())
                .map(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
                .unwrap_or(false)
    }
}
