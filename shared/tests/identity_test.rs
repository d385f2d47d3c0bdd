use std::borrow::Cow;

use shared::{add_to_collection_if_missing, equals_by_id, merge_missing, Asset, Pair};

fn pair(id: i64) -> Pair {
    Pair {
        id,
        ..Default::default()
    }
}

fn ids(pairs: &[Pair]) -> Vec<i64> {
    pairs.iter().map(|p| p.id).collect()
}

#[test]
fn test_equals_by_id() {
    let a = Asset {
        id: 123,
        ..Default::default()
    };
    let same = Asset {
        id: 123,
        name: Some("other name".to_string()),
        ..Default::default()
    };
    let b = Asset {
        id: 456,
        ..Default::default()
    };

    assert!(equals_by_id::<Asset>(None, None));
    assert!(!equals_by_id(Some(&a), None));
    assert!(!equals_by_id(None, Some(&a)));
    assert!(!equals_by_id(Some(&a), Some(&b)));
    assert!(equals_by_id(Some(&a), Some(&same)));
}

#[test]
fn test_nothing_to_add_returns_same_collection() {
    let collection = vec![pair(123)];

    let merged = add_to_collection_if_missing(&collection, Vec::<Option<Pair>>::new());
    assert!(matches!(merged, Cow::Borrowed(_)));
    assert!(std::ptr::eq(merged.as_ptr(), collection.as_ptr()));

    let merged = add_to_collection_if_missing(&collection, [None, None]);
    assert!(matches!(merged, Cow::Borrowed(_)));

    let merged = add_to_collection_if_missing(&collection, [Some(pair(123))]);
    assert!(matches!(merged, Cow::Borrowed(_)));
    assert_eq!(ids(&merged), vec![123]);
}

#[test]
fn test_add_to_empty_collection() {
    let empty: Vec<Pair> = Vec::new();
    let merged = add_to_collection_if_missing(&empty, [Some(pair(123))]);
    assert_eq!(ids(&merged), vec![123]);
}

#[test]
fn test_new_entries_are_prepended_in_order() {
    let collection = vec![pair(456)];
    let merged = add_to_collection_if_missing(&collection, [Some(pair(123)), None, Some(pair(789))]);
    assert_eq!(ids(&merged), vec![123, 789, 456]);
    assert_eq!(ids(&collection), vec![456]);
}

#[test]
fn test_merge_never_duplicates() {
    let collection: Vec<Pair> = (1..=5).map(pair).collect();
    let candidates = [3, 6, 6, 1, 7, 7, 2].into_iter().map(|id| Some(pair(id)));

    let merged = add_to_collection_if_missing(&collection, candidates);

    assert_eq!(ids(&merged), vec![6, 7, 1, 2, 3, 4, 5]);
    let mut seen = std::collections::HashSet::new();
    assert!(merged.iter().all(|p| seen.insert(p.id)));
}

#[test]
fn test_owned_merge_keeps_allocation_when_unchanged() {
    let collection = vec![pair(1), pair(2)];
    let before = collection.as_ptr();

    let merged = merge_missing(collection, [Some(pair(2)), None]);
    assert!(std::ptr::eq(merged.as_ptr(), before));

    let merged = merge_missing(merged, [Some(pair(3))]);
    assert_eq!(ids(&merged), vec![3, 1, 2]);
}
