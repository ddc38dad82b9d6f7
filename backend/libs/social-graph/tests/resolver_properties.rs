use nova_common::{ConnectionEdge, User};
use proptest::prelude::*;
use social_graph::{
    partition_roster, remove_user_from_candidates, resolve_connection_ids, ConnectionSet,
};

// Small id alphabet so generated edges and rosters actually overlap.
fn arb_user_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e", "f", "g"]).prop_map(str::to_string)
}

fn arb_edge() -> impl Strategy<Value = ConnectionEdge> {
    (prop::option::weighted(0.9, arb_user_id()), prop::option::weighted(0.9, arb_user_id()))
        .prop_map(|(user1_id, user2_id)| ConnectionEdge { user1_id, user2_id })
}

fn arb_roster() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(arb_user_id(), 0..12).prop_map(|ids| {
        ids.into_iter()
            .map(|id| User::new(id.clone(), id.to_uppercase(), format!("{}@example.com", id)))
            .collect()
    })
}

fn arb_connected_set() -> impl Strategy<Value = ConnectionSet> {
    prop::collection::hash_set(arb_user_id(), 0..5)
}

proptest! {
    #[test]
    fn resolved_set_never_contains_reference(
        edges in prop::collection::vec(arb_edge(), 0..20),
        reference in arb_user_id(),
    ) {
        let resolved = resolve_connection_ids(&edges, &reference);
        prop_assert!(!resolved.contains(&reference));
    }

    #[test]
    fn resolved_ids_come_from_touching_edges(
        edges in prop::collection::vec(arb_edge(), 0..20),
        reference in arb_user_id(),
    ) {
        let resolved = resolve_connection_ids(&edges, &reference);
        for id in &resolved {
            prop_assert!(edges.iter().any(|e| e.touches(&reference) && e.touches(id)));
        }
    }

    #[test]
    fn partition_excludes_reference_and_connected(
        roster in arb_roster(),
        reference in arb_user_id(),
        connected in arb_connected_set(),
        limit in prop::option::of(0usize..6),
    ) {
        let candidates = partition_roster(&roster, &reference, &connected, limit);

        for user in &candidates {
            prop_assert_ne!(&user.id, &reference);
            prop_assert!(!connected.contains(&user.id));
            prop_assert!(roster.contains(user));
        }
        if let Some(limit) = limit {
            prop_assert!(candidates.len() <= limit);
        }
    }

    #[test]
    fn partition_is_an_ordered_subsequence_without_duplicates(
        roster in arb_roster(),
        reference in arb_user_id(),
        connected in arb_connected_set(),
    ) {
        let candidates = partition_roster(&roster, &reference, &connected, None);

        let positions = candidates
            .iter()
            .map(|c| roster.iter().position(|u| u.id == c.id).unwrap());
        let mut last = None;
        for pos in positions {
            prop_assert!(last.map_or(true, |l| pos > l));
            last = Some(pos);
        }
    }

    #[test]
    fn partition_is_deterministic(
        roster in arb_roster(),
        edges in prop::collection::vec(arb_edge(), 0..20),
        reference in arb_user_id(),
    ) {
        let first = partition_roster(&roster, &reference, &resolve_connection_ids(&edges, &reference), None);
        let second = partition_roster(&roster, &reference, &resolve_connection_ids(&edges, &reference), None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn removing_a_candidate_is_idempotent(
        roster in arb_roster(),
        removed in arb_user_id(),
    ) {
        let once = remove_user_from_candidates(&roster, &removed);
        let twice = remove_user_from_candidates(&once, &removed);

        prop_assert!(once.iter().all(|u| u.id != removed));
        prop_assert_eq!(once, twice);
    }
}
