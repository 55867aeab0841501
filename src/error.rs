//! Error types for task operations.

use thiserror::Error;

/// A local precondition on a new task that was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is empty")]
    EmptyTitle,
    #[error("description is empty")]
    EmptyDescription,
    #[error("no due date selected")]
    MissingDate,
}

/// Errors produced by the task service and the list controller.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("server returned {status}")]
    Rejected { status: u16 },

    /// Success status, but the body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Rejected locally before any request was made.
    #[error("invalid task: {0}")]
    Validation(#[from] ValidationError),
}

/// Coarse classification of a [`TaskError`], as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    ServerRejected,
    ValidationFailure,
}

impl TaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::NetworkFailure,
            Self::Rejected { .. } | Self::Malformed(_) => ErrorKind::ServerRejected,
            Self::Validation(_) => ErrorKind::ValidationFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_body_counts_as_rejection() {
        let err = TaskError::Malformed("missing field `data`".into());
        assert_eq!(err.kind(), ErrorKind::ServerRejected);
    }

    #[test]
    fn validation_converts_from_precondition() {
        let err: TaskError = ValidationError::MissingDate.into();
        assert_eq!(err.kind(), ErrorKind::ValidationFailure);
        assert_eq!(err.to_string(), "invalid task: no due date selected");
    }
}
