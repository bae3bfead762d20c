//! # Receipt Errors
//!
//! Callers that both resolve a format and render with it see one error type.
//! The `#[from]` conversions let `?` lift module errors into it.

use crate::registry::RegistryError;
use crate::renderer::RenderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// Format lookup or registration failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The renderer rejected the order.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A batch job panicked or was cancelled before producing a result.
    #[error("Receipt task failed: {0}")]
    TaskFailed(String),
}

impl ReceiptError {
    /// True when the failure is an unknown format, the one case a fallback
    /// format can recover from.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ReceiptError::Registry(RegistryError::UnsupportedFormat(_)))
    }
}
