//! # System Lifecycle & Orchestration
//!
//! Renderers, the registry and the service are each simple on their own.
//! This module is the caller that wires them together.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`SystemConfig`] from defaults or `RECEIPT_*` variables
//! 2. **Registry Setup** - built-in formats registered at startup
//! 3. **Dependency Injection** - resolve a renderer, hand it to a [`ReceiptService`](crate::service::ReceiptService)
//! 4. **Recovery** - fall back to a default format when the requested one is unknown
//! 5. **Observability Setup** - [`setup_tracing`](tracing::setup_tracing)
//!
//! ## The ReceiptSystem Pattern
//!
//! ```rust,ignore
//! let system = ReceiptSystem::from_env();
//!
//! // Formats can be added while the system is running
//! system.register("fax", Arc::new(FaxRenderer))?;
//!
//! // Resolve + inject + render
//! let receipt = system.print(&order, "pdf")?;
//!
//! // Or many at once, concurrently
//! let results = system.print_batch(jobs).await;
//! ```
//!
//! The registry is the only shared state. Orders and renderers are
//! immutable, so concurrent jobs need no locking beyond the registry's own.

pub mod config;
pub mod receipt_system;
pub mod tracing;

pub use config::SystemConfig;
pub use receipt_system::{PrintJob, ReceiptSystem};
