//! Client-side contact form.
//!
//! [`SubmissionForm`] owns one [`ContactDraft`] for the lifetime of a form
//! session, projects it into a [`Preview`] on demand and drives submission.
//!
//! Submissions run as detached tokio tasks. There is no in-flight guard: two
//! quick submits send two requests, and whichever response arrives last is
//! what the result slot shows. Dropping the form disposes the slot, so late
//! responses are discarded.

mod result_slot;
pub use result_slot::ResultSlot;

use crate::client::AsyncContactClient;
use crate::error::{SubmitError, SubmitResult};
use crate::models::{ConfirmationResult, ContactDraft};
use crate::preview::Preview;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Message shown in the result slot when a submission fails without a reply
/// message from the endpoint.
pub const SUBMIT_FAILED_MESSAGE: &str = "送信に失敗しました。";

/// A mounted contact form.
pub struct SubmissionForm {
    draft: ContactDraft,
    result: ResultSlot,
    client: Arc<dyn AsyncContactClient>,
    runtime: Option<Handle>,
}

impl SubmissionForm {
    /// Mount a form with an empty draft and an empty result slot.
    ///
    /// Submissions are spawned on the runtime current at mount time, if any,
    /// otherwise on the runtime current when [`submit`](Self::submit) is called.
    pub fn new(client: Arc<dyn AsyncContactClient>) -> Self {
        Self {
            draft: ContactDraft::new(),
            result: ResultSlot::new(),
            client,
            runtime: Handle::try_current().ok(),
        }
    }

    /// Mount a form whose submissions always run on `runtime`.
    pub fn with_runtime(client: Arc<dyn AsyncContactClient>, runtime: Handle) -> Self {
        Self {
            draft: ContactDraft::new(),
            result: ResultSlot::new(),
            client,
            runtime: Some(runtime),
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Mutable access for field edits.
    pub fn draft_mut(&mut self) -> &mut ContactDraft {
        &mut self.draft
    }

    /// Preview of the current draft.
    pub fn preview(&self) -> Preview {
        Preview::of(&self.draft)
    }

    /// Message from the most recently arrived response, if any.
    pub fn result(&self) -> Option<String> {
        self.result.get()
    }

    /// Handle to the result slot, for views that display it.
    pub fn result_slot(&self) -> ResultSlot {
        self.result.clone()
    }

    /// Send the current draft's `{name, email}` to the endpoint.
    ///
    /// The request runs in the background; the returned handle may be awaited
    /// or dropped. The draft is left untouched. Panics if the form has no
    /// runtime and none is current.
    pub fn submit(&self) -> PendingSubmission {
        let payload = self.draft.payload();
        let client = self.client.clone();
        let slot = self.result.clone();

        info!(name = %payload.name, email = %payload.email, "Submitting contact form");

        let runtime = self.runtime.clone().unwrap_or_else(Handle::current);
        let handle = runtime.spawn(async move {
            let result = client.submit(payload).await;
            let shown = match &result {
                Ok(confirmation) => confirmation.message.as_str(),
                Err(SubmitError::Rejected { status, message }) => {
                    warn!("Contact submission rejected with status {}", status);
                    message.as_str()
                }
                Err(e) => {
                    warn!("Contact submission failed: {}", e);
                    SUBMIT_FAILED_MESSAGE
                }
            };
            if !slot.store(shown) {
                debug!("Form unmounted before response arrived; discarding");
            }
            result
        });

        PendingSubmission { handle }
    }

    /// Unmount the form. Equivalent to dropping it.
    pub fn unmount(self) {}
}

impl Drop for SubmissionForm {
    fn drop(&mut self) {
        self.result.dispose();
    }
}

/// Handle to one outstanding submission.
pub struct PendingSubmission {
    handle: JoinHandle<SubmitResult<ConfirmationResult>>,
}

impl PendingSubmission {
    /// Wait for the response. The result slot has already been updated when
    /// this returns.
    pub async fn wait(self) -> SubmitResult<ConfirmationResult> {
        self.handle
            .await
            .map_err(|e| SubmitError::Cancelled(e.to_string()))?
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
