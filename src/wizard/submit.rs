//! Final submission collaborator
//!
//! The wizard hands the aggregated [`FormValues`] to a [`Submitter`] once the
//! last step validates. Implementations:
//! - [`DelayedSubmitter`]: simulated remote call with a configurable delay
//!   and an optional number of rejected attempts
//! - test doubles in the integration tests

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::form::FormValues;
use crate::{Result, WizardError};

/// Proof of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// 1-based attempt number that succeeded
    pub attempt: u32,
    pub values: FormValues,
}

impl SubmissionReceipt {
    pub fn new(values: FormValues, attempt: u32) -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            attempt,
            values,
        }
    }

    /// Pretty JSON for `--json` output
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Receives the complete form once every step has validated
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit the aggregated values. May suspend; errors are surfaced to the
    /// user and leave the wizard retryable.
    async fn submit(&self, values: FormValues) -> Result<SubmissionReceipt>;

    /// Identifier for logging
    fn name(&self) -> &'static str;
}

/// Simulates a slow remote endpoint
#[derive(Debug)]
pub struct DelayedSubmitter {
    delay: Duration,
    fail_attempts: u32,
    attempts: AtomicU32,
}

impl DelayedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail_attempts: 0,
            attempts: AtomicU32::new(0),
        }
    }

    /// Reject the first `count` attempts before accepting
    pub fn failing_first(mut self, count: u32) -> Self {
        self.fail_attempts = count;
        self
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Submitter for DelayedSubmitter {
    async fn submit(&self, values: FormValues) -> Result<SubmissionReceipt> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        info!(attempt, delay_ms = self.delay.as_millis() as u64, "Submitting form values");

        tokio::time::sleep(self.delay).await;

        if attempt <= self.fail_attempts {
            warn!(attempt, "Submission rejected");
            return Err(WizardError::Submission(format!(
                "the server rejected attempt {} of {}, please try again",
                attempt,
                self.fail_attempts.saturating_add(1)
            )));
        }

        let receipt = SubmissionReceipt::new(values, attempt);
        info!(reference = %receipt.reference, attempt, "Submission accepted");
        Ok(receipt)
    }

    fn name(&self) -> &'static str {
        "delayed"
    }
}
