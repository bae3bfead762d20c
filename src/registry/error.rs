//! Error types for the renderer registry.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No renderer is registered under the requested format key.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Strict registration refused to replace an existing renderer.
    #[error("Format already registered: {0}")]
    AlreadyRegistered(String),
}
