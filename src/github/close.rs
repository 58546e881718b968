use crate::github::error::Result;
use crate::github::repo::RepoId;
use crate::rate_limit::RateLimiter;
use reqwest::StatusCode;
use std::fmt;

/// Transitions a single issue to closed. Implemented by the HTTP client and by
/// test fakes.
#[allow(async_fn_in_trait)]
pub trait IssueCloser {
    async fn close_issue(&self, repo: &RepoId, number: u64) -> Result<StatusCode>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    Closed,
    /// `status` is `None` when the request never got a response
    Failed { status: Option<StatusCode> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloseReport {
    pub number: u64,
    pub repo: RepoId,
    pub outcome: CloseOutcome,
}

impl fmt::Display for CloseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            CloseOutcome::Closed => write!(f, "Closed issue {} in {}.", self.number, self.repo),
            CloseOutcome::Failed { .. } => {
                write!(f, "Error closing issue {} in {}.", self.number, self.repo)
            }
        }
    }
}

/// Closes issues one at a time, waiting on the limiter before each request.
pub struct BatchCloser {
    limiter: RateLimiter,
}

impl BatchCloser {
    pub fn new(limiter: RateLimiter) -> Self {
        BatchCloser { limiter }
    }

    /// Attempts every number exactly once, in order. Failures are reported and
    /// skipped; only an error from `report` stops the batch.
    pub async fn close_all<C, F, E>(
        &mut self,
        closer: &C,
        repo: &RepoId,
        numbers: &[u64],
        mut report: F,
    ) -> std::result::Result<Vec<CloseReport>, E>
    where
        C: IssueCloser,
        F: FnMut(&CloseReport) -> std::result::Result<(), E>,
    {
        let mut reports = Vec::with_capacity(numbers.len());
        for &number in numbers {
            self.limiter.wait().await;
            let outcome = match closer.close_issue(repo, number).await {
                Ok(status) if status == StatusCode::OK => CloseOutcome::Closed,
                Ok(status) => {
                    tracing::warn!(number, %repo, %status, "Close request rejected");
                    CloseOutcome::Failed {
                        status: Some(status),
                    }
                }
                Err(err) => {
                    tracing::warn!(number, %repo, error = %err, "Close request failed");
                    CloseOutcome::Failed { status: None }
                }
            };
            let close_report = CloseReport {
                number,
                repo: repo.clone(),
                outcome,
            };
            report(&close_report)?;
            reports.push(close_report);
        }
        Ok(reports)
    }
}
