use nova_common::{ConnectionEdge, User};
use std::collections::HashSet;
use tracing::debug;

/// Ids of the users one hop away from a reference user.
/// Never contains the reference user's own id.
pub type ConnectionSet = HashSet<String>;

/// Resolve the ids connected to `reference_user_id`.
///
/// Edges are undirected: for each edge touching the reference user the other
/// endpoint is collected. Edges between other users are ignored, since the
/// API may return them. Malformed edges (an endpoint missing) and self-loops
/// are skipped rather than failing the resolution.
pub fn resolve_connection_ids(edges: &[ConnectionEdge], reference_user_id: &str) -> ConnectionSet {
    let mut connected = ConnectionSet::with_capacity(edges.len());
    let mut malformed = 0usize;
    let mut foreign = 0usize;

    for edge in edges {
        let Some((user1, user2)) = edge.endpoints() else {
            malformed += 1;
            continue;
        };

        let other = if user1 == reference_user_id {
            user2
        } else if user2 == reference_user_id {
            user1
        } else {
            foreign += 1;
            continue;
        };

        if other != reference_user_id {
            connected.insert(other.to_string());
        }
    }

    if malformed > 0 || foreign > 0 {
        debug!(
            reference_user_id = %reference_user_id,
            malformed,
            foreign,
            "Skipped connection edges"
        );
    }

    connected
}

/// Users eligible as connection suggestions, in roster order.
///
/// Excludes the reference user and every id in `connected_ids`, drops repeated
/// roster entries, and truncates to `limit` when given.
pub fn partition_roster(
    roster: &[User],
    reference_user_id: &str,
    connected_ids: &ConnectionSet,
    limit: Option<usize>,
) -> Vec<User> {
    let cap = limit.unwrap_or(usize::MAX);
    let mut seen = HashSet::with_capacity(roster.len());
    let mut candidates = Vec::new();

    for user in roster {
        if candidates.len() >= cap {
            break;
        }
        if user.id == reference_user_id || connected_ids.contains(user.id.as_str()) {
            continue;
        }
        if seen.insert(user.id.as_str()) {
            candidates.push(user.clone());
        }
    }

    candidates
}

/// The complement of [`partition_roster`]: roster members the reference user
/// is already connected to, in roster order.
pub fn connected_users(
    roster: &[User],
    reference_user_id: &str,
    connected_ids: &ConnectionSet,
) -> Vec<User> {
    let mut seen = HashSet::with_capacity(connected_ids.len());
    let mut connected = Vec::with_capacity(connected_ids.len());

    for user in roster {
        if user.id != reference_user_id
            && connected_ids.contains(user.id.as_str())
            && seen.insert(user.id.as_str())
        {
            connected.push(user.clone());
        }
    }

    connected
}

/// Optimistic update after a successful "add connection".
pub fn remove_user_from_candidates(candidates: &[User], removed_id: &str) -> Vec<User> {
    candidates
        .iter()
        .filter(|user| user.id != removed_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[&str]) -> Vec<User> {
        ids.iter()
            .map(|id| User::new(*id, id.to_uppercase(), format!("{}@example.com", id)))
            .collect()
    }

    fn ids(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    fn set(ids: &[&str]) -> ConnectionSet {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_resolve_ignores_foreign_edges() {
        let edges = vec![
            ConnectionEdge::new("A", "B"),
            ConnectionEdge::new("A", "C"),
            ConnectionEdge::new("X", "Y"),
        ];

        assert_eq!(resolve_connection_ids(&edges, "A"), set(&["B", "C"]));
    }

    #[test]
    fn test_resolve_is_direction_agnostic_and_deduplicates() {
        let edges = vec![
            ConnectionEdge::new("B", "A"),
            ConnectionEdge::new("A", "B"),
            ConnectionEdge::new("A", "B"),
        ];

        assert_eq!(resolve_connection_ids(&edges, "A"), set(&["B"]));
    }

    #[test]
    fn test_resolve_skips_malformed_and_self_loops() {
        let edges = vec![
            ConnectionEdge {
                user1_id: Some("A".into()),
                user2_id: None,
            },
            ConnectionEdge::default(),
            ConnectionEdge::new("A", "A"),
            ConnectionEdge::new("C", "A"),
        ];

        let resolved = resolve_connection_ids(&edges, "A");
        assert_eq!(resolved, set(&["C"]));
        assert!(!resolved.contains("A"));
    }

    #[test]
    fn test_resolve_empty_input() {
        assert!(resolve_connection_ids(&[], "A").is_empty());
    }

    #[test]
    fn test_partition_with_limit() {
        let result = partition_roster(&roster(&["A", "B", "C", "D"]), "A", &set(&["B"]), Some(2));
        assert_eq!(ids(&result), vec!["C", "D"]);
    }

    #[test]
    fn test_partition_without_limit_keeps_order() {
        let result = partition_roster(&roster(&["D", "A", "C", "B", "E"]), "A", &set(&["B"]), None);
        assert_eq!(ids(&result), vec!["D", "C", "E"]);
    }

    #[test]
    fn test_partition_drops_repeated_roster_entries() {
        let result = partition_roster(&roster(&["B", "C", "B"]), "A", &set(&[]), None);
        assert_eq!(ids(&result), vec!["B", "C"]);
    }

    #[test]
    fn test_partition_limit_zero_is_empty() {
        assert!(partition_roster(&roster(&["B", "C"]), "A", &set(&[]), Some(0)).is_empty());
    }

    #[test]
    fn test_connected_users_is_complement() {
        let all = roster(&["A", "B", "C", "D"]);
        let connected = set(&["B", "D", "Z"]);

        assert_eq!(ids(&connected_users(&all, "A", &connected)), vec!["B", "D"]);
        assert_eq!(ids(&partition_roster(&all, "A", &connected, None)), vec!["C"]);
    }

    #[test]
    fn test_remove_user_from_candidates() {
        let candidates = roster(&["B", "C", "D"]);

        let once = remove_user_from_candidates(&candidates, "C");
        assert_eq!(ids(&once), vec!["B", "D"]);

        let twice = remove_user_from_candidates(&once, "C");
        assert_eq!(once, twice);

        assert_eq!(remove_user_from_candidates(&candidates, "Z"), candidates);
    }
}
