use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use shared::{samples, Chart, Entity, Fee, NewTimeRange, Ohlc, Ref, TimeRange, Touple, Tuple};

#[test]
fn test_new_record_sends_null_id() {
    let value = serde_json::to_value(NewTimeRange {
        name: Some("1m".to_string()),
        range_size: Some(1),
        ..samples::time_range::new_data()
    })
    .unwrap();

    assert_eq!(value, json!({ "id": null, "name": "1m", "rangeSize": 1 }));
}

#[test]
fn test_fields_are_camel_case() {
    let value = serde_json::to_value(samples::ohlc::partial_data()).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("volumeWeightedAveragePrice"));
    assert!(!object.contains_key("volume_weighted_average_price"));
    assert!(!object.contains_key("time"));
}

#[test]
fn test_timestamp_round_trip() {
    let chart = samples::chart::full_data();
    let value = serde_json::to_value(&chart).unwrap();
    assert_eq!(value["last"], "2022-10-25T04:47:00.000Z");

    let parsed: Chart = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, chart);
}

#[test]
fn test_microsecond_timestamp_round_trip() {
    let chart = Chart {
        last: Some(Utc.with_ymd_and_hms(2022, 10, 25, 4, 47, 0).unwrap() + chrono::Duration::microseconds(123_456)),
        ..samples::chart::full_data()
    };
    let value = serde_json::to_value(&chart).unwrap();
    assert_eq!(value["last"], "2022-10-25T04:47:00.123456Z");

    let parsed: Chart = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, chart);
}

#[test]
fn test_offset_timestamp_is_read_as_utc() {
    let tuple: Tuple = serde_json::from_str(r#"{"id": 1, "time": "2022-10-24T20:04:00+02:00"}"#).unwrap();
    assert_eq!(tuple.time, Some(Utc.with_ymd_and_hms(2022, 10, 24, 18, 4, 0).unwrap()));
}

#[test]
fn test_null_and_missing_fields_are_absent() {
    let touple: Touple = serde_json::from_str(r#"{"id": 7, "time": null, "computation": null}"#).unwrap();
    assert_eq!(touple, Touple::stub(7));
}

#[test]
fn test_embedded_relationship_keeps_only_id() {
    let json = r#"{
        "id": 4573,
        "volume": 16810,
        "percent": 0.26,
        "pair": { "id": 81911, "name": "Tobago blockchains", "base": { "id": 1 } }
    }"#;
    let fee: Fee = serde_json::from_str(json).unwrap();

    assert_eq!(fee.pair, Some(Ref::new(81911)));
    assert_eq!(fee.percent, Some(Decimal::new(26, 2)));
}

#[test]
fn test_decimal_keeps_precision() {
    let ohlc: Ohlc = serde_json::from_str(r#"{"id": 1, "close": 19234.123456789012345678}"#).unwrap();
    assert_eq!(ohlc.close.unwrap().to_string(), "19234.123456789012345678");
}

#[test]
fn test_malformed_timestamp_is_rejected() {
    assert!(serde_json::from_str::<Chart>(r#"{"id": 1, "last": "yesterday"}"#).is_err());
}

#[test]
fn test_resource_paths() {
    assert_eq!(TimeRange::RESOURCE_PATH, "api/time-ranges");
    assert_eq!(Touple::RESOURCE_PATH, "api/touples");
    assert_eq!(Chart::NAME, "chart");
}

#[test]
fn test_from_ref_builds_stub() {
    let chart = Chart::from_ref(Ref::new(11304));
    assert_eq!(chart, samples::chart::required_data());
}
