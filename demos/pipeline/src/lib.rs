//! Filter positive numbers, round them, and sum them up.
//!
//! Composes [functools::filter], [functools::map], and [functools::reduce] into a
//! single pipeline over user-supplied values.

use functools::{filter, map, try_map, try_reduce};
use thiserror::Error;
use tracing::{debug, Level};

/// Values used when none are provided.
pub const DEFAULT_VALUES: [&str; 5] = ["-5.3", "2.8", "-1.0", "8.9", "0.1"];

/// Errors that can occur while preparing the pipeline input.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("non-finite value: {0}")]
    NonFinite(String),
    #[error("value does not round to a 64-bit integer: {0}")]
    OutOfRange(String),
    #[error("sum overflows a 64-bit integer at {0}")]
    Overflow(i64),
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}

/// Magnitude of the smallest `i64` (2^63), exactly representable as an `f64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Parse raw values into finite floats that round to an `i64`, failing on the
/// first invalid entry.
pub fn parse_values(raw: &[String]) -> Result<Vec<f64>, Error> {
    try_map(raw, |s| -> Result<f64, Error> {
        let s = s.trim();
        let value = s.parse::<f64>().map_err(|_| Error::InvalidValue(s.to_string()))?;
        if !value.is_finite() {
            return Err(Error::NonFinite(s.to_string()));
        }
        if !(-I64_LIMIT..I64_LIMIT).contains(&value.round()) {
            return Err(Error::OutOfRange(s.to_string()));
        }
        Ok(value)
    })
}

/// Parse a log level (case-insensitive).
pub fn parse_level(raw: &str) -> Result<Level, Error> {
    raw.parse::<Level>().map_err(|_| Error::InvalidLevel(raw.to_string()))
}

/// Intermediate and final results of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Values strictly greater than the threshold, in input order.
    pub kept: Vec<f64>,
    /// Kept values rounded half away from zero.
    pub rounded: Vec<i64>,
    /// Sum of the rounded values.
    pub sum: i64,
}

/// Keep values greater than `threshold`, round them, and sum them up.
///
/// `values` are expected to come from [parse_values], so every value rounds to
/// an `i64`. Fails if the sum does not fit in an `i64`.
pub fn summarize(values: &[f64], threshold: f64) -> Result<Summary, Error> {
    let kept = filter(values, |x| *x > threshold);
    debug!(total = values.len(), kept = kept.len(), threshold, "filtered");
    let rounded = map(&kept, |x| x.round() as i64);
    let sum = try_reduce(&rounded, 0, |x, acc: i64| {
        acc.checked_add(*x).ok_or(Error::Overflow(*x))
    })?;
    Ok(Summary { kept, rounded, sum })
}

/// Describe the outcome of [summarize] in a single line.
pub fn report(values: &[f64], threshold: f64, summary: &Summary) -> String {
    let filtered = if threshold == 0.0 {
        "positive numbers".to_string()
    } else {
        format!("numbers greater than {threshold}")
    };
    format!(
        "{values:?} filtered by {filtered}, rounded and summed up is {}",
        summary.sum
    )
}
