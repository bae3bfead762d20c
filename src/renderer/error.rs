//! Error type for renderer failures.

use crate::model::Order;
use thiserror::Error;

/// A renderer could not produce output for the order it was given.
///
/// Carries the format key of the failing renderer so callers can decide
/// whether to retry with another format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Cannot render {format} receipt: {reason}")]
pub struct RenderError {
    pub format: String,
    pub reason: String,
}

impl RenderError {
    pub fn new(format: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Returns the value of `key`, or a "missing required field" error for `format`.
    pub fn require_field<'a>(order: &'a Order, format: &str, key: &str) -> Result<&'a str, Self> {
        order
            .field(key)
            .ok_or_else(|| Self::new(format, format!("order {} is missing required field `{}`", order.id(), key)))
    }
}
