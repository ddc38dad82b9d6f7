use nova_common::User;
use serde::Serialize;
use social_graph::{connected_users, partition_roster};
use tracing::info;

use super::connection_ids_or_empty;
use crate::api::SocialApi;
use crate::error::ClientResult;
use crate::session::Session;

/// Roster split for the connections page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionsView {
    /// Users the session user is connected to
    pub connected: Vec<User>,
    /// Everyone else, uncapped
    pub candidates: Vec<User>,
}

/// Connections page: who the session user is connected to, and who they
/// could connect with.
#[derive(Debug, Default)]
pub struct ConnectionsScreen;

impl ConnectionsScreen {
    pub fn new() -> Self {
        Self
    }

    /// Connections and roster are fetched concurrently. A connections failure
    /// degrades to "no connections", while a roster failure is returned to
    /// the caller.
    pub async fn load(&self, api: &dyn SocialApi, session: &Session) -> ClientResult<ConnectionsView> {
        let (connected_ids, roster) = tokio::join!(
            connection_ids_or_empty(api, session, &session.user_id),
            api.list_users(session)
        );
        let roster = roster?;

        let view = ConnectionsView {
            connected: connected_users(&roster, &session.user_id, &connected_ids),
            candidates: partition_roster(&roster, &session.user_id, &connected_ids, None),
        };

        info!(
            user_id = %session.user_id,
            roster = roster.len(),
            connected = view.connected.len(),
            candidates = view.candidates.len(),
            "Connections screen loaded"
        );

        Ok(view)
    }
}
