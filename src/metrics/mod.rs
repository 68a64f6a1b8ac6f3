//! Counters for contact submissions.
//!
//! The client tracks how many submissions it sent, how many failed and how long
//! they took. The endpoint tracks how many bodies it accepted or rejected.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by clones.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submissions sent by the client
    submissions_total: Arc<AtomicU64>,

    /// Submissions that ended in an error
    submission_errors_total: Arc<AtomicU64>,

    /// Total duration of all submissions in milliseconds
    submission_duration_total_ms: Arc<AtomicU64>,

    /// Requests the endpoint answered with a confirmation
    contacts_received_total: Arc<AtomicU64>,

    /// Requests the endpoint rejected as unparseable
    malformed_requests_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            submission_errors_total: Arc::new(AtomicU64::new(0)),
            submission_duration_total_ms: Arc::new(AtomicU64::new(0)),
            contacts_received_total: Arc::new(AtomicU64::new(0)),
            malformed_requests_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a submission with its duration.
    pub fn record_submission(&self, duration: Duration) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
        self.submission_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_submission_error(&self) {
        self.submission_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_received(&self) {
        self.contacts_received_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_malformed_request(&self) {
        self.malformed_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn submission_errors_total(&self) -> u64 {
        self.submission_errors_total.load(Ordering::Relaxed)
    }

    pub fn submission_duration_total_ms(&self) -> u64 {
        self.submission_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average submission duration in milliseconds.
    pub fn submission_duration_avg_ms(&self) -> f64 {
        let total = self.submission_duration_total_ms.load(Ordering::Relaxed);
        let count = self.submissions_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn contacts_received_total(&self) -> u64 {
        self.contacts_received_total.load(Ordering::Relaxed)
    }

    pub fn malformed_requests_total(&self) -> u64 {
        self.malformed_requests_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            submission_errors_total: self.submission_errors_total(),
            submission_duration_total_ms: self.submission_duration_total_ms(),
            submission_duration_avg_ms: self.submission_duration_avg_ms(),
            contacts_received_total: self.contacts_received_total(),
            malformed_requests_total: self.malformed_requests_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub submission_errors_total: u64,
    pub submission_duration_total_ms: u64,
    pub submission_duration_avg_ms: f64,
    pub contacts_received_total: u64,
    pub malformed_requests_total: u64,
}

/// Helper for timing one submission.
pub struct SubmitTimer {
    start: Instant,
    metrics: Metrics,
}

impl SubmitTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_submission(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_submission(self.start.elapsed());
        self.metrics.record_submission_error();
    }
}
