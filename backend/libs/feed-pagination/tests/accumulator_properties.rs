use feed_pagination::{FeedAccumulator, PaginationError};
use nova_common::{FeedPage, Post};
use proptest::prelude::*;

fn arb_posts() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec("[a-z0-9]{1,8}", 0..6)
        .prop_map(|ids| ids.into_iter().map(|id| Post::new(id, "title", "body")).collect())
}

/// Accumulator after applying `pages` well-formed pages out of `total`.
fn advanced(pages: &[Vec<Post>], total: u32) -> FeedAccumulator {
    let mut acc = FeedAccumulator::new();
    for (idx, posts) in pages.iter().enumerate() {
        acc.append_page(FeedPage::new(posts.clone(), idx as u32 + 1, total))
            .unwrap();
    }
    acc
}

proptest! {
    #[test]
    fn valid_page_appends_exactly_its_posts(
        history in prop::collection::vec(arb_posts(), 0..4),
        next in arb_posts(),
        extra_pages in 1u32..4,
    ) {
        let total = history.len() as u32 + extra_pages;
        let mut acc = advanced(&history, total);
        let before = acc.items().to_vec();
        let page_number = acc.next_page_request().unwrap();

        acc.append_page(FeedPage::new(next.clone(), page_number, total)).unwrap();

        prop_assert_eq!(acc.len(), before.len() + next.len());
        prop_assert_eq!(&acc.items()[..before.len()], &before[..]);
        prop_assert_eq!(&acc.items()[before.len()..], &next[..]);
        prop_assert_eq!(acc.current_page(), page_number);
        prop_assert_eq!(acc.is_exhausted(), page_number >= total);
    }

    #[test]
    fn wrong_page_number_is_rejected_and_leaves_state(
        (history, total) in prop::collection::vec(arb_posts(), 0..5).prop_flat_map(|history| {
            let applied = history.len() as u32;
            (Just(history), 1..=applied + 3)
        }),
        posts in arb_posts(),
        page_number in 0u32..10,
    ) {
        // Totals up to the history length leave the accumulator exhausted
        let history = &history[..history.len().min(total as usize)];
        let mut acc = advanced(history, total);
        let expected = acc.current_page() + 1;
        prop_assume!(page_number != expected);
        let before = acc.clone();

        let result = acc.append_page(FeedPage::new(posts, page_number, total));

        prop_assert_eq!(
            result,
            Err(PaginationError::StaleOrOutOfOrderPage { expected, received: page_number })
        );
        prop_assert_eq!(acc, before);
    }

    #[test]
    fn draining_all_pages_ends_exhausted(
        pages in prop::collection::vec(arb_posts(), 1..6),
    ) {
        let total = pages.len() as u32;
        let acc = advanced(&pages, total);

        prop_assert!(acc.is_exhausted());
        prop_assert_eq!(acc.next_page_request(), None);
        prop_assert_eq!(acc.len(), pages.iter().map(Vec::len).sum::<usize>());
    }
}

#[test]
fn accumulator_serializes_progress() {
    let mut acc = FeedAccumulator::new();
    acc.append_page(FeedPage::new(vec![Post::new("p1", "t", "b")], 1, 2))
        .unwrap();

    let json = serde_json::to_value(&acc).unwrap();

    assert_eq!(json["currentPage"], 1);
    assert_eq!(json["exhausted"], false);
    assert_eq!(json["items"][0]["_id"], "p1");
}
