// File: crates/rtchart-core/src/error.rs
// Summary: Typed errors raised at the engine's input boundary (sample parsing, colour parsing).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    #[error("unparsable datetime '{0}'")]
    InvalidDatetime(String),
    #[error("non-finite response time {0}")]
    NonFiniteValue(f64),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("colour '{0}' must start with '#'")]
    MissingHash(String),
    #[error("colour '{0}' must have 3, 4, 6 or 8 hex digits")]
    BadLength(String),
    #[error("colour '{0}' contains a non-hex digit")]
    BadDigit(String),
}
