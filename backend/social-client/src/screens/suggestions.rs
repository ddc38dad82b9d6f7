use nova_common::{ApiMessage, ServiceError, User};
use social_graph::{partition_roster, remove_user_from_candidates};
use tracing::{info, warn};

use super::connection_ids_or_empty;
use crate::api::SocialApi;
use crate::error::ClientResult;
use crate::session::Session;

/// "Who to follow" panel: a capped list of connection candidates with an
/// add-connection action.
#[derive(Debug, Clone)]
pub struct SuggestionsPanel {
    limit: usize,
    candidates: Vec<User>,
}

impl SuggestionsPanel {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            candidates: Vec::new(),
        }
    }

    pub fn candidates(&self) -> &[User] {
        &self.candidates
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fetch connections and roster concurrently and recompute the candidates.
    pub async fn load(&mut self, api: &dyn SocialApi, session: &Session) -> ClientResult<&[User]> {
        let (connected_ids, roster) = tokio::join!(
            connection_ids_or_empty(api, session, &session.user_id),
            api.list_users(session)
        );
        let roster = roster?;

        self.candidates = partition_roster(&roster, &session.user_id, &connected_ids, Some(self.limit));

        info!(
            user_id = %session.user_id,
            suggestions = self.candidates.len(),
            "Suggestions loaded"
        );
        Ok(&self.candidates)
    }

    /// Connect with `target_user_id`. On success the target is dropped from
    /// the candidates without re-fetching; on failure nothing changes.
    pub async fn add_connection(
        &mut self,
        api: &dyn SocialApi,
        session: &Session,
        target_user_id: &str,
    ) -> ClientResult<ApiMessage> {
        if target_user_id == session.user_id {
            return Err(ServiceError::InvalidRequest("cannot connect to yourself".to_string()).into());
        }

        match api.create_connection(target_user_id, session).await {
            Ok(message) => {
                self.candidates = remove_user_from_candidates(&self.candidates, target_user_id);
                info!(
                    user_id = %session.user_id,
                    target_user_id = %target_user_id,
                    "Connection added"
                );
                Ok(message)
            }
            Err(e) => {
                warn!(
                    user_id = %session.user_id,
                    target_user_id = %target_user_id,
                    error = %e,
                    "Failed to add connection"
                );
                Err(e.into())
            }
        }
    }
}
