use nova_common::{FeedPage, Post};
use serde::Serialize;
use tracing::debug;

use crate::error::{PaginationError, PaginationResult};

/// Append-only collection of feed posts plus pagination progress.
///
/// Lifecycle: starts at page 0 with no items, grows one page at a time via
/// [`append_page`](Self::append_page), and becomes terminal once the last page
/// has been applied. Posts are concatenated as received; overlapping pages
/// from the API are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedAccumulator {
    items: Vec<Post>,
    current_page: u32,
    exhausted: bool,
}

impl FeedAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page to fetch next, or `None` once the feed is exhausted.
    /// Callers must not issue a fetch when this returns `None`.
    pub fn next_page_request(&self) -> Option<u32> {
        if self.exhausted {
            None
        } else {
            Some(self.current_page + 1)
        }
    }

    /// Apply the next page.
    ///
    /// Rejects pages whose number is not exactly `current_page + 1`, even once
    /// the feed is exhausted; an in-order page after the terminal one fails
    /// with [`PaginationError::Exhausted`]. A rejected page leaves the
    /// accumulator untouched.
    pub fn append_page(&mut self, page: FeedPage) -> PaginationResult<()> {
        // current_page == u32::MAX only after the terminal page
        let Some(expected) = self.current_page.checked_add(1) else {
            return Err(PaginationError::Exhausted {
                last_page: self.current_page,
            });
        };

        if page.page_number != expected {
            return Err(PaginationError::StaleOrOutOfOrderPage {
                expected,
                received: page.page_number,
            });
        }

        if self.exhausted {
            return Err(PaginationError::Exhausted {
                last_page: self.current_page,
            });
        }

        self.exhausted = page.is_last();
        self.current_page = page.page_number;
        let appended = page.posts.len();
        self.items.extend(page.posts);

        debug!(
            page = self.current_page,
            total_pages = page.total_pages,
            appended,
            total_items = self.items.len(),
            exhausted = self.exhausted,
            "Applied feed page"
        );

        Ok(())
    }

    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Post> {
        self.items
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
