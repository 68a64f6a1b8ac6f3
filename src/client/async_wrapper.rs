//! Async wrapper around the synchronous ContactClient.
//!
//! This module provides an async interface to the synchronous ContactClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ContactClient;
use crate::error::{SubmitError, SubmitResult};
use crate::models::{ConfirmationResult, SubmissionPayload};
use async_trait::async_trait;
use std::sync::Arc;

/// Async submission seam used by the form.
#[async_trait]
pub trait AsyncContactClient: Send + Sync {
    async fn submit(&self, payload: SubmissionPayload) -> SubmitResult<ConfirmationResult>;
}

/// Async wrapper around synchronous ContactClient.
#[derive(Clone)]
pub struct AsyncContactClientImpl {
    client: Arc<ContactClient>,
}

impl AsyncContactClientImpl {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn inner(&self) -> &ContactClient {
        &self.client
    }
}

#[async_trait]
impl AsyncContactClient for AsyncContactClientImpl {
    async fn submit(&self, payload: SubmissionPayload) -> SubmitResult<ConfirmationResult> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.submit(&payload))
            .await
            .map_err(|e| SubmitError::HttpError(format!("Task join error: {}", e)))?
    }
}
