//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole crate.
//!
//! The compact format hides the module path (`with_target(false)`) and shows
//! span hierarchy inline, e.g. `print:print_receipt{order_id=101 format="pdf"}`.
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! # Registrations and rendered receipts
//! RUST_LOG=info cargo run
//!
//! # Also every registry lookup and full order payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the registry
//! RUST_LOG=receipt_dispatch::registry=debug cargo run
//! ```

/// Initializes the global subscriber.
///
/// Safe to call more than once: later calls are ignored, so tests and
/// binaries can both call it.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
