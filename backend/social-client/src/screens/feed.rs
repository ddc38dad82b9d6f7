use feed_pagination::{FeedAccumulator, PaginationError};
use nova_common::{FeedPage, Post, ServiceError};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api::SocialApi;
use crate::error::{ClientError, ClientResult};
use crate::session::Session;

/// Fetch status of a feed screen. Kept beside the accumulator, never in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

/// Handle for one outstanding page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    page: u32,
    generation: u64,
}

impl PageTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Outcome of [`FeedScreen::complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied { appended: usize, exhausted: bool },
    Failed(ServiceError),
    /// The ticket belonged to an abandoned load; the response was dropped.
    Discarded,
}

/// A user's post feed with "load more".
///
/// At most one page request is outstanding at a time. [`reset`](Self::reset)
/// abandons the in-flight request; its late response is discarded instead of
/// being applied to the fresh accumulator.
#[derive(Debug)]
pub struct FeedScreen {
    user_id: String,
    page_limit: u32,
    accumulator: FeedAccumulator,
    state: LoadState,
    generation: u64,
    pending: Option<u32>,
}

impl FeedScreen {
    pub fn new(user_id: impl Into<String>, page_limit: u32) -> Self {
        Self {
            user_id: user_id.into(),
            page_limit,
            accumulator: FeedAccumulator::new(),
            state: LoadState::Idle,
            generation: 0,
            pending: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn posts(&self) -> &[Post] {
        self.accumulator.items()
    }

    pub fn accumulator(&self) -> &FeedAccumulator {
        &self.accumulator
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_more(&self) -> bool {
        !self.accumulator.is_exhausted()
    }

    /// Claim the next page to fetch. `None` when the feed is exhausted or a
    /// request is already outstanding.
    pub fn begin_load(&mut self) -> Option<PageTicket> {
        if self.pending.is_some() {
            debug!(user_id = %self.user_id, "Load already in flight");
            return None;
        }

        let page = self.accumulator.next_page_request()?;
        self.pending = Some(page);
        self.state = LoadState::Loading;

        Some(PageTicket {
            page,
            generation: self.generation,
        })
    }

    /// Apply the response for `ticket`.
    ///
    /// A page rejected by the accumulator is a protocol bug and is returned as
    /// an error; fetch failures are reported through [`Completion::Failed`].
    pub fn complete(
        &mut self,
        ticket: PageTicket,
        outcome: nova_common::Result<FeedPage>,
    ) -> Result<Completion, PaginationError> {
        if ticket.generation != self.generation || self.pending != Some(ticket.page) {
            debug!(
                user_id = %self.user_id,
                page = ticket.page,
                "Discarding response for abandoned feed load"
            );
            return Ok(Completion::Discarded);
        }
        self.pending = None;

        let page = match outcome {
            Ok(page) => page,
            Err(e) => {
                warn!(user_id = %self.user_id, page = ticket.page, error = %e, "Failed to fetch feed page");
                self.state = LoadState::Errored(e.to_string());
                return Ok(Completion::Failed(e));
            }
        };

        let before = self.accumulator.len();
        if let Err(e) = self.accumulator.append_page(page) {
            self.state = LoadState::Errored(e.to_string());
            return Err(e);
        }

        self.state = LoadState::Loaded;
        Ok(Completion::Applied {
            appended: self.accumulator.len() - before,
            exhausted: self.accumulator.is_exhausted(),
        })
    }

    /// Abandon any outstanding load and start over from page 1.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.accumulator = FeedAccumulator::new();
        self.state = LoadState::Idle;
    }

    /// Fetch and apply the next page. Returns the number of posts appended,
    /// or `None` when there was nothing to load.
    pub async fn load_more(
        &mut self,
        api: &dyn SocialApi,
        session: &Session,
    ) -> ClientResult<Option<usize>> {
        let Some(ticket) = self.begin_load() else {
            return Ok(None);
        };

        let outcome = api
            .get_user_posts(&self.user_id, ticket.page, self.page_limit, session)
            .await;

        match self.complete(ticket, outcome)? {
            Completion::Applied {
                appended,
                exhausted,
            } => {
                info!(
                    user_id = %self.user_id,
                    page = ticket.page,
                    appended,
                    total = self.accumulator.len(),
                    exhausted,
                    "Feed page loaded"
                );
                Ok(Some(appended))
            }
            Completion::Failed(e) => Err(ClientError::Service(e)),
            Completion::Discarded => Ok(None),
        }
    }
}
