/// Error types for feed pagination
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Pages must be applied strictly in order, each exactly once.
    #[error("Stale or out-of-order page: expected page {expected}, received page {received}")]
    StaleOrOutOfOrderPage { expected: u32, received: u32 },

    #[error("Feed already exhausted after page {last_page}")]
    Exhausted { last_page: u32 },
}

/// Result type alias for pagination operations
pub type PaginationResult<T> = Result<T, PaginationError>;
