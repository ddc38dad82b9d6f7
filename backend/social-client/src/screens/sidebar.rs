use feed_pagination::FeedAccumulator;
use serde::Serialize;
use social_graph::resolve_connection_ids;
use tracing::{info, warn};

use crate::api::SocialApi;
use crate::error::ClientResult;
use crate::session::Session;

const DEFAULT_DELETE_MESSAGE: &str = "Your account has been deleted.";

/// Profile counters. A counter is `None` when its fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub user_id: String,
    pub post_count: Option<usize>,
    pub connection_count: Option<usize>,
}

/// Profile sidebar: post/connection counters and account deletion.
#[derive(Debug, Clone)]
pub struct ProfileSidebar {
    page_limit: u32,
    max_count_pages: u32,
}

impl ProfileSidebar {
    pub fn new(page_limit: u32, max_count_pages: u32) -> Self {
        Self {
            page_limit,
            max_count_pages,
        }
    }

    /// Load both counters for `user_id` concurrently; each fails on its own.
    pub async fn load(&self, api: &dyn SocialApi, session: &Session, user_id: &str) -> ProfileSummary {
        let (posts, connections) = tokio::join!(
            self.count_posts(api, session, user_id),
            self.count_connections(api, session, user_id)
        );

        let post_count = posts
            .map_err(|e| warn!(user_id = %user_id, error = %e, "Failed to fetch post count"))
            .ok();
        let connection_count = connections
            .map_err(|e| warn!(user_id = %user_id, error = %e, "Failed to fetch connection count"))
            .ok();

        info!(
            user_id = %user_id,
            post_count = ?post_count,
            connection_count = ?connection_count,
            "Profile sidebar loaded"
        );

        ProfileSummary {
            user_id: user_id.to_string(),
            post_count,
            connection_count,
        }
    }

    /// Number of distinct users connected to `user_id`.
    pub async fn count_connections(
        &self,
        api: &dyn SocialApi,
        session: &Session,
        user_id: &str,
    ) -> ClientResult<usize> {
        let edges = api.get_connections(user_id, session).await?;
        Ok(resolve_connection_ids(&edges, user_id).len())
    }

    /// Total posts by `user_id`, walking the feed page by page.
    ///
    /// Stops after `max_count_pages`; the count is then a lower bound.
    pub async fn count_posts(
        &self,
        api: &dyn SocialApi,
        session: &Session,
        user_id: &str,
    ) -> ClientResult<usize> {
        let mut feed = FeedAccumulator::new();

        while let Some(page) = feed.next_page_request() {
            if page > self.max_count_pages {
                warn!(
                    user_id = %user_id,
                    max_count_pages = self.max_count_pages,
                    "Post count truncated"
                );
                break;
            }
            let next = api.get_user_posts(user_id, page, self.page_limit, session).await?;
            feed.append_page(next)?;
        }

        Ok(feed.len())
    }

    /// Delete the session user's account and return the server's message.
    /// Signing out afterwards is up to the caller.
    pub async fn delete_account(&self, api: &dyn SocialApi, session: &Session) -> ClientResult<String> {
        let response = api.delete_user(&session.user_id, session).await?;

        info!(user_id = %session.user_id, "Account deletion confirmed");
        Ok(response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DELETE_MESSAGE.to_string()))
    }
}
