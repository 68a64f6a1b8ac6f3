//! Shared cell holding the latest submission result.

use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct SlotState {
    message: Option<String>,
    disposed: bool,
}

/// Result slot shared between a form and its outstanding submissions.
///
/// The last write wins. Once disposed, the slot is empty and ignores writes.
#[derive(Debug, Clone, Default)]
pub struct ResultSlot {
    state: Arc<RwLock<SlotState>>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message. Returns `false` if the slot was disposed.
    pub fn store(&self, message: impl Into<String>) -> bool {
        if let Ok(mut state) = self.state.write() {
            if state.disposed {
                return false;
            }
            state.message = Some(message.into());
            return true;
        }
        false
    }

    /// Current message, if a response has arrived.
    pub fn get(&self) -> Option<String> {
        self.state.read().ok().and_then(|s| s.message.clone())
    }

    /// Empty the slot and refuse further writes.
    pub fn dispose(&self) {
        if let Ok(mut state) = self.state.write() {
            state.disposed = true;
            state.message = None;
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.state.read().map(|s| s.disposed).unwrap_or(true)
    }
}
