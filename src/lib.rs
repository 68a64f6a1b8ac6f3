//! Contact Form - the contact submission flow of a portfolio site.
//!
//! A client-side [`SubmissionForm`] collects a [`ContactDraft`], renders a live
//! [`Preview`] of it and submits `{name, email}` to the contact endpoint, which
//! answers with a [`ConfirmationResult`].
//!
//! # Architecture
//!
//! - **models**: the draft, the wire request and the confirmation
//! - **preview**: pure projection of a draft for display
//! - **form**: the form state and its shared result slot
//! - **client**: HTTP client for the endpoint
//! - **server**: the `POST /api/contacts` endpoint
//! - **config**: configuration from environment variables
//! - **error**: error types
//! - **metrics**: submission and request counters

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod preview;
pub mod server;

pub use client::{AsyncContactClient, AsyncContactClientImpl, ContactClient};
pub use config::Config;
pub use error::{ConfigError, ServerError, SubmitError};
pub use form::{PendingSubmission, ResultSlot, SubmissionForm, SUBMIT_FAILED_MESSAGE};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Category, ConfirmationResult, ContactDraft, ContactRequest, SubmissionPayload};
pub use preview::Preview;
pub use server::{build_router, AppState};
