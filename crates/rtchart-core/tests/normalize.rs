// File: crates/rtchart-core/tests/normalize.rs
// Purpose: Sample parsing and normalization (ordering, duplicates, bad records).

mod support;

use proptest::prelude::*;
use rtchart_core::sample::{is_normalized, normalize, normalize_raw, parse_datetime};
use rtchart_core::{RawSample, Sample, SampleError};
use support::BASE_MS;

#[test]
fn sorts_by_time_and_keeps_duplicates_in_input_order() {
    let input = vec![
        Sample::new(3_000, 3.0),
        Sample::new(1_000, 1.0),
        Sample::new(2_000, 20.0),
        Sample::new(2_000, 21.0),
    ];
    let out = normalize(&input);
    let ts = out.iter().map(|s| s.timestamp_ms).collect::<Vec<_>>();
    assert_eq!(ts, vec![1_000, 2_000, 2_000, 3_000]);
    assert_eq!(out[1].value, 20.0);
    assert_eq!(out[2].value, 21.0);
}

#[test]
fn parses_offsets_and_offsetless_timestamps() {
    assert_eq!(parse_datetime("2024-01-01T10:00:00Z").unwrap(), BASE_MS);
    assert_eq!(parse_datetime("2024-01-01T12:00:00+02:00").unwrap(), BASE_MS);
    assert_eq!(parse_datetime("2024-01-01T10:00:00.250Z").unwrap(), BASE_MS + 250);
    assert_eq!(parse_datetime("2024-01-01T10:00:00").unwrap(), BASE_MS);
    assert_eq!(parse_datetime("2024-01-01 10:00:00").unwrap(), BASE_MS);
}

#[test]
fn rejects_garbage_datetime_and_non_finite_values() {
    assert_eq!(parse_datetime("yesterday"), Err(SampleError::InvalidDatetime("yesterday".into())));
    let raw = RawSample { value: f64::NAN, datetime: "2024-01-01T10:00:00Z".into() };
    assert!(matches!(Sample::try_from(&raw), Err(SampleError::NonFiniteValue(_))));
}

#[test]
fn raw_batch_skips_bad_records_and_sorts() {
    let raw = vec![
        RawSample { value: 200.0, datetime: "2024-01-01T10:05:00Z".into() },
        RawSample { value: 999.0, datetime: "not a date".into() },
        RawSample { value: 100.0, datetime: "2024-01-01T10:00:00Z".into() },
    ];
    let out = normalize_raw(&raw);
    assert_eq!(out, vec![Sample::new(BASE_MS, 100.0), Sample::new(BASE_MS + 300_000, 200.0)]);
}

#[test]
fn raw_samples_deserialize_from_api_json() {
    let json = r#"[{"value": 450, "datetime": "2024-01-01T10:00:00Z"}]"#;
    let raw: Vec<RawSample> = serde_json::from_str(json).expect("valid json");
    assert_eq!(normalize_raw(&raw), vec![Sample::new(BASE_MS, 450.0)]);
}

#[test]
fn empty_input_stays_empty() {
    assert!(normalize(&[]).is_empty());
    assert!(normalize_raw(&[]).is_empty());
}

proptest! {
    #[test]
    fn normalized_is_sorted_and_idempotent(
        raw in prop::collection::vec((0i64..10_000_000, 0.0f64..5_000.0), 0..60)
    ) {
        let samples = raw.iter().map(|&(t, v)| Sample::new(t, v)).collect::<Vec<_>>();
        let once = normalize(&samples);
        prop_assert!(is_normalized(&once));
        prop_assert_eq!(once.len(), samples.len());
        prop_assert_eq!(normalize(&once), once);
    }
}
