mod common;

use serde_json::json;

use client::EntityList;
use shared::TimeRange;

async fn seeded() -> (common::Backend, EntityList<TimeRange>) {
    let (backend, services, _) = common::spawn().await;
    for id in 1..=5 {
        backend.seed("time-ranges", json!({ "id": id, "rangeSize": id * 5 }));
    }
    (backend, EntityList::new(services.time_ranges.clone(), 2))
}

#[tokio::test]
async fn test_load_first_page() {
    let (backend, mut list) = seeded().await;

    list.load().await.unwrap();

    assert_eq!(list.items.len(), 2);
    assert_eq!(list.total_items, Some(5));
    assert!(!list.is_loading);
    let query = backend.last_request().query.unwrap();
    assert!(query.contains("page=0"));
    assert!(query.contains("sort=id%2Casc"));
}

#[tokio::test]
async fn test_sorting_same_column_flips_direction() {
    let (backend, mut list) = seeded().await;

    list.sort_by("id").await.unwrap();
    assert!(backend.last_request().query.unwrap().contains("sort=id%2Cdesc"));

    list.sort_by("rangeSize").await.unwrap();
    assert!(backend.last_request().query.unwrap().contains("sort=rangeSize%2Casc"));
}

#[tokio::test]
async fn test_last_page_is_short() {
    let (_, mut list) = seeded().await;

    list.navigate_to_page(2).await.unwrap();

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.track_id(&list.items[0]), 5);
}

#[tokio::test]
async fn test_delete_reloads_page() {
    let (backend, mut list) = seeded().await;
    list.load().await.unwrap();

    list.delete(1).await.unwrap();

    assert_eq!(list.total_items, Some(4));
    assert_eq!(list.items[0].id, 2);
    assert_eq!(backend.count("time-ranges"), 4);
}
