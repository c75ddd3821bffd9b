// File: crates/rtchart-core/src/sample.rs
// Summary: Sample model and normalizer (parse ISO-8601 records, stable sort by time).
// Notes:
// - Callers do not guarantee ordering; duplicates are kept, never merged.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// Wire shape handed over by the data-retrieval layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Response time in milliseconds.
    pub value: f64,
    /// ISO-8601 timestamp.
    pub datetime: String,
}

/// One observed (time, value) measurement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp_ms: i64,
    pub value: f64,
}

impl Sample {
    pub const fn new(timestamp_ms: i64, value: f64) -> Self {
        Self { timestamp_ms, value }
    }
}

impl TryFrom<&RawSample> for Sample {
    type Error = SampleError;

    fn try_from(raw: &RawSample) -> Result<Self, Self::Error> {
        if !raw.value.is_finite() {
            return Err(SampleError::NonFiniteValue(raw.value));
        }
        let timestamp_ms = parse_datetime(&raw.datetime)?;
        Ok(Self { timestamp_ms, value: raw.value })
    }
}

/// Parse an ISO-8601 timestamp into epoch milliseconds.
/// Strings without an offset are read as UTC.
pub fn parse_datetime(s: &str) -> Result<i64, SampleError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }
    Err(SampleError::InvalidDatetime(s.to_string()))
}

/// Stable sort by timestamp. Equal timestamps keep their input order.
pub fn normalize(samples: &[Sample]) -> Vec<Sample> {
    let mut out = samples.to_vec();
    out.sort_by_key(|s| s.timestamp_ms);
    out
}

/// Parse and normalize wire records. Unparsable records are skipped with a warning.
pub fn normalize_raw(raw: &[RawSample]) -> Vec<Sample> {
    let parsed = raw
        .iter()
        .filter_map(|r| match Sample::try_from(r) {
            Ok(s) => Some(s),
            Err(err) => {
                tracing::warn!(%err, "skipping sample");
                None
            }
        })
        .collect::<Vec<_>>();
    normalize(&parsed)
}

/// True when `samples` is sorted non-decreasing by time.
pub fn is_normalized(samples: &[Sample]) -> bool {
    samples.windows(2).all(|w| w[0].timestamp_ms <= w[1].timestamp_ms)
}
