use async_trait::async_trait;
use contact_form::error::{SubmitError, SubmitResult};
use contact_form::{AsyncContactClient, ConfirmationResult, SubmissionPayload};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type Reply = SubmitResult<ConfirmationResult>;

/// Mock contact client with test-controlled response timing.
///
/// A submission whose payload name has a registered gate waits until the test
/// sends the reply through that gate. Submissions without a gate are answered
/// immediately with `"{name}: ok"`. Every payload is recorded.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactClient {
    calls: Arc<Mutex<Vec<SubmissionPayload>>>,
    gates: Arc<Mutex<HashMap<String, oneshot::Receiver<Reply>>>>,
}

#[allow(dead_code)]
impl MockContactClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold replies to submissions named `name` until the returned sender fires.
    pub fn gate(&self, name: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(name.to_string(), rx);
        tx
    }

    /// Payloads received so far, in call order.
    pub fn calls(&self) -> Vec<SubmissionPayload> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncContactClient for MockContactClient {
    async fn submit(&self, payload: SubmissionPayload) -> Reply {
        self.calls.lock().unwrap().push(payload.clone());
        let gate = self.gates.lock().unwrap().remove(&payload.name);

        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SubmitError::Cancelled("gate dropped".to_string()))),
            None => Ok(ConfirmationResult::new(format!("{}: ok", payload.name))),
        }
    }
}
