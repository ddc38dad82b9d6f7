//! Page accumulation for a user's post feed.
//!
//! The accumulator only tracks feed data (items, last applied page,
//! exhaustion). Whether a fetch is in flight is the caller's concern.

pub mod accumulator;
pub mod error;

pub use accumulator::FeedAccumulator;
pub use error::{PaginationError, PaginationResult};
