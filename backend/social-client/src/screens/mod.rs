pub mod connections;
pub mod feed;
pub mod sidebar;
pub mod suggestions;

pub use connections::{ConnectionsScreen, ConnectionsView};
pub use feed::{Completion, FeedScreen, LoadState, PageTicket};
pub use sidebar::{ProfileSidebar, ProfileSummary};
pub use suggestions::SuggestionsPanel;

use social_graph::{resolve_connection_ids, ConnectionSet};
use tracing::warn;

use crate::api::SocialApi;
use crate::session::Session;

/// Connection ids of `user_id`, degrading to an empty set when the
/// connections endpoint fails so the roster can still be shown.
async fn connection_ids_or_empty(
    api: &dyn SocialApi,
    session: &Session,
    user_id: &str,
) -> ConnectionSet {
    match api.get_connections(user_id, session).await {
        Ok(edges) => resolve_connection_ids(&edges, user_id),
        Err(e) => {
            warn!(
                user_id = %user_id,
                error = %e,
                "Failed to fetch connections (continuing with none)"
            );
            ConnectionSet::new()
        }
    }
}
