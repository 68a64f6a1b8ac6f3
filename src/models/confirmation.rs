//! Confirmation returned by the contact endpoint.

use serde::{Deserialize, Serialize};

/// Single-field JSON body returned after a submission is processed.
///
/// The message is rendered to the user as-is; success or failure is only
/// distinguished by the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ConfirmationResult {
    pub message: String,
}

impl ConfirmationResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
