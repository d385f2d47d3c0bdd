mod common;

use serde_json::json;

use client::EntityEditor;
use shared::{samples, Chart, Fee, Ref};

#[tokio::test]
async fn test_blank_editor_creates_record() {
    let (backend, services, _) = common::spawn().await;
    backend.seed("pairs", json!({ "id": 1, "name": "XBTUSD" }));
    backend.seed("pairs", json!({ "id": 2, "name": "ETHUSD" }));
    backend.seed("time-ranges", json!({ "id": 7, "rangeSize": 5 }));

    let mut editor = EntityEditor::<Chart>::open(services, None).await.unwrap();
    assert_eq!(editor.options.pairs.len(), 2);
    assert_eq!(editor.options.time_ranges.len(), 1);

    editor
        .form
        .patch(json!({ "name": "btc 5m", "pair": { "id": 1 }, "timeRange": { "id": 7 } }))
        .unwrap();
    let saved = editor.save().await.unwrap();

    assert!(!editor.is_saving());
    assert_eq!(saved.pair, Some(Ref::new(1)));
    assert_eq!(backend.count("charts"), 1);
    assert_eq!(backend.last_request().method, "POST");
}

#[tokio::test]
async fn test_current_reference_is_listed_first() {
    let (backend, services, _) = common::spawn().await;
    backend.seed("pairs", json!({ "id": 1, "name": "XBTUSD" }));

    let fee = Fee {
        pair: Some(Ref::new(99)),
        ..samples::fee::full_data()
    };
    let editor = EntityEditor::open(services, Some(fee)).await.unwrap();

    let ids: Vec<i64> = editor.options.pairs.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![99, 1]);
}

#[tokio::test]
async fn test_listed_reference_is_not_repeated() {
    let (backend, services, _) = common::spawn().await;
    backend.seed("pairs", json!({ "id": 1, "name": "XBTUSD" }));

    let fee = Fee {
        pair: Some(Ref::new(1)),
        ..samples::fee::full_data()
    };
    let editor = EntityEditor::open(services, Some(fee)).await.unwrap();

    assert_eq!(editor.options.pairs.len(), 1);
    assert_eq!(editor.options.pairs[0].name.as_deref(), Some("XBTUSD"));
}

#[tokio::test]
async fn test_existing_record_is_updated() {
    let (backend, services, _) = common::spawn().await;
    let chart = samples::chart::full_data();
    backend.seed("charts", serde_json::to_value(&chart).unwrap());

    let mut editor = EntityEditor::open(services, Some(chart)).await.unwrap();
    editor.form.patch(json!({ "maxCount": 10 })).unwrap();
    let saved = editor.save().await.unwrap();

    assert_eq!(saved.max_count, Some(10));
    let sent = backend.last_request();
    assert_eq!(sent.method, "PUT");
    assert_eq!(sent.path, "/api/charts/9544");
}

#[tokio::test]
async fn test_partial_save_patches_record() {
    let (backend, services, _) = common::spawn().await;
    let chart = samples::chart::full_data();
    backend.seed("charts", serde_json::to_value(&chart).unwrap());

    let mut editor = EntityEditor::open(services, Some(chart)).await.unwrap();
    editor.form.patch(json!({ "disabled": true })).unwrap();
    let saved = editor.save_partial().await.unwrap();

    assert_eq!(saved.disabled, Some(true));
    assert_eq!(backend.last_request().method, "PATCH");
}

#[tokio::test]
async fn test_failed_save_resets_saving_flag() {
    let (backend, services, _) = common::spawn().await;
    let mut editor = EntityEditor::<Chart>::open(services, None).await.unwrap();

    backend.fail_with(500);
    let err = editor.save().await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(!editor.is_saving());
}
