// ==========================================
// PM Scheduling Core - Crate-Level Error Taxonomy
// ==========================================
// Empty history, empty eligible set and empty roster are valid outcomes,
// never errors. Only data-access and configuration problems surface here.
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A date string matched none of the accepted patterns. Record-local:
    /// the offending history row is excluded, the run continues.
    #[error("invalid date format: {0:?} matches no accepted pattern")]
    InvalidDateFormat(String),

    /// The equipment catalog or completion-history store cannot be reached
    /// (or timed out). Fatal to the whole run; no partial schedule.
    #[error("repository unavailable: {0}")]
    RepositoryUnavailable(String),

    /// Interval/grace/pivot values out of range. Raised at service
    /// construction, before any scheduling attempt.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

// Any repository failure aborts the run; the distinction between "cannot
// connect" and "query failed" does not change the caller's options.
impl From<RepositoryError> for ScheduleError {
    fn from(err: RepositoryError) -> Self {
        ScheduleError::RepositoryUnavailable(err.to_string())
    }
}

/// Result type alias for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
