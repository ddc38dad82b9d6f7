/// Error types for social-client
use feed_pagination::PaginationError;
use nova_common::ServiceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

impl ClientError {
    /// Whether the caller may reasonably offer a retry. Protocol violations
    /// are bugs, not transient failures.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Service(err) => err.is_retryable(),
            ClientError::Pagination(_) => false,
        }
    }
}

/// Result type alias for screen operations
pub type ClientResult<T> = Result<T, ClientError>;
