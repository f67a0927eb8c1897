//! Property-based tests for fluentq using proptest.

use std::collections::HashSet;

use fluentq::{Pair, Q, QueryError};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct TestItem {
    key: u8,
    name: String,
    seq: usize,
}

// Small key space so duplicates are common.
fn test_items_strategy(max: usize) -> impl Strategy<Value = Vec<TestItem>> {
    prop::collection::vec((0u8..6, "[a-z]{1,6}"), 0..max).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(seq, (key, name))| TestItem { key, name, seq })
            .collect()
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// filter yields an ordered subsequence of matching elements.
    #[test]
    fn filter_is_ordered_subsequence(
        items in prop::collection::vec(any::<i32>(), 0..100),
        threshold in any::<i32>(),
    ) {
        let original = items.clone();
        let kept = Q::from(items.clone()).filter(|n| *n > threshold).to_list();

        prop_assert!(kept.len() <= items.len());
        prop_assert!(kept.iter().all(|n| *n > threshold));

        let expected: Vec<i32> = items.iter().copied().filter(|n| *n > threshold).collect();
        prop_assert_eq!(kept, expected);
        prop_assert_eq!(items, original);
    }

    /// The match step emits every satisfying pair in (left, right) index order.
    #[test]
    fn join_is_inner_nested_loop(
        left in prop::collection::vec(0u8..8, 0..20),
        right in prop::collection::vec(0u8..8, 0..20),
    ) {
        let indexed_left: Vec<(usize, u8)> = left.iter().copied().enumerate().collect();
        let indexed_right: Vec<(usize, u8)> = right.iter().copied().enumerate().collect();

        let pairs = Q::join(indexed_left.clone(), indexed_right.clone())
            .on(|l, r| l.1 == r.1)
            .to_list()
            .unwrap();

        let mut expected = Vec::new();
        for l in &indexed_left {
            for r in &indexed_right {
                if l.1 == r.1 {
                    expected.push(Pair::of(*l, *r));
                }
            }
        }
        prop_assert_eq!(&pairs, &expected);

        let matched_left: HashSet<usize> = pairs.iter().map(|p| p.left.0).collect();
        for l in &indexed_left {
            let has_match = right.contains(&l.1);
            prop_assert_eq!(matched_left.contains(&l.0), has_match);
        }
    }

    /// group_by_left has one group per distinct left key, sized by its pairs.
    #[test]
    fn group_by_left_counts(
        left in test_items_strategy(20),
        right in prop::collection::vec(0u8..6, 0..20),
    ) {
        let joined = Q::join(left, right).on(|l, r| l.key == *r);
        let pairs = joined.pairs().unwrap().to_vec();
        let groups = joined.group_by_left(|l| l.key).unwrap().to_list();

        let distinct: Vec<u8> = Q::from(pairs.iter().map(|p| p.left.key))
            .distinct(|k| *k)
            .to_list();
        prop_assert_eq!(groups.len(), distinct.len());

        for (group, key) in groups.iter().zip(&distinct) {
            prop_assert_eq!(group.left.key, *key);
            let expected = pairs.iter().filter(|p| p.left.key == *key).count();
            prop_assert_eq!(group.right.len(), expected);
        }
    }

    /// Indexed and scanned grouping agree on order and content.
    #[test]
    fn group_by_left_strategies_agree(
        left in test_items_strategy(20),
        right in prop::collection::vec(0u8..6, 0..20),
    ) {
        let joined = Q::join(left, right).on(|l, r| l.key <= *r);
        let indexed = joined.clone().group_by_left(|l| l.key).unwrap().to_list();
        let scanned = joined.group_by_left_eq(|l| l.key).unwrap().to_list();
        prop_assert_eq!(indexed, scanned);
    }

    /// distinct keeps exactly the first element of each key, in order.
    #[test]
    fn distinct_first_occurrence(items in test_items_strategy(50)) {
        let kept = Q::from(items.clone()).distinct(|i| i.key).to_list();

        let mut seen = HashSet::new();
        let expected: Vec<TestItem> = items
            .into_iter()
            .filter(|i| seen.insert(i.key))
            .collect();
        prop_assert_eq!(kept, expected);
    }

    /// Ascending order is stable; descending is its exact reverse.
    #[test]
    fn ordering_is_stable(items in test_items_strategy(40)) {
        let asc = Q::from(items.clone()).order_by(|i| i.key).to_list();
        for w in asc.windows(2) {
            prop_assert!(w[0].key <= w[1].key);
            if w[0].key == w[1].key {
                prop_assert!(w[0].seq < w[1].seq, "Stable sort violated: equal items reordered");
            }
        }

        let desc = Q::from(items).order_by_desc(|i| i.key).to_list();
        let mut reversed = asc;
        reversed.reverse();
        prop_assert_eq!(desc, reversed);
    }

    /// Calling a pair operation before the match step never yields data.
    #[test]
    fn unjoined_always_fails(
        left in prop::collection::vec(any::<u8>(), 0..10),
        right in prop::collection::vec(any::<u8>(), 0..10),
    ) {
        let join = Q::join(left, right);
        prop_assert_eq!(join.clone().to_list().unwrap_err(), QueryError::JoinNotApplied);
        prop_assert_eq!(join.select(|p| p.left).unwrap_err(), QueryError::JoinNotApplied);
    }

    /// to_map fails exactly when some key repeats.
    #[test]
    fn to_map_detects_duplicates(items in test_items_strategy(20)) {
        let keys: HashSet<u8> = items.iter().map(|i| i.key).collect();
        let has_duplicate = keys.len() != items.len();

        let result = Q::from(items.clone()).to_map(|i| i.key, |i| i.seq);
        prop_assert_eq!(result.is_err(), has_duplicate);
        if let Ok(map) = result {
            prop_assert_eq!(map.len(), items.len());
        }
    }

    /// group_by keeps every element exactly once, in source order per group.
    #[test]
    fn group_by_partitions(items in test_items_strategy(50)) {
        let groups = Q::from(items.clone()).group_by(|i| i.key).to_list();

        let total: usize = groups.iter().map(|g| g.len()).sum();
        prop_assert_eq!(total, items.len());

        for group in &groups {
            prop_assert!(group.values.iter().all(|i| i.key == group.key));
            prop_assert!(group.values.windows(2).all(|w| w[0].seq < w[1].seq));
        }
    }

    /// any and all agree with the standard iterator quantifiers.
    #[test]
    fn quantifiers_match_std(
        items in prop::collection::vec(any::<i16>(), 0..50),
        threshold in any::<i16>(),
    ) {
        let selector = Q::from(items.clone());
        prop_assert_eq!(selector.any(|n| *n < threshold), items.iter().any(|n| *n < threshold));
        prop_assert_eq!(selector.all(|n| *n < threshold), items.iter().all(|n| *n < threshold));
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_collection_edges() {
    let items: Vec<i64> = vec![];
    let selector = Q::from(items);

    assert!(selector.is_empty());
    assert!(!selector.any(|_| true));
    assert!(selector.all(|_| false)); // vacuously true
    assert!(!selector.all_same(|n| *n));
    assert!(selector.first(|_| true).is_none());
    assert_eq!(selector.sum_i64(|n| *n), 0);
    assert_eq!(selector.group_by(|n| *n).len(), 0);
}

#[test]
fn join_with_empty_side() {
    let pairs = Q::join(Vec::<u8>::new(), vec![1u8, 2])
        .on(|_, _| true)
        .to_list()
        .unwrap();
    assert!(pairs.is_empty());

    let pairs = Q::join(vec![1u8, 2], Vec::<u8>::new())
        .on(|_, _| true)
        .to_list()
        .unwrap();
    assert!(pairs.is_empty());
}
