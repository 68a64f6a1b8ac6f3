//! Data models for the contact submission flow.
//!
//! This module contains the client-side draft, the wire shapes exchanged with the
//! endpoint, and the confirmation returned after a submission.

pub mod confirmation;
pub mod draft;
pub mod request;

pub use confirmation::ConfirmationResult;
pub use draft::{Category, ContactDraft};
pub use request::{ContactRequest, SubmissionPayload};
