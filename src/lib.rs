//! # Receipt Dispatch
//!
//! > **Pluggable receipt rendering: one order, many formats.**
//!
//! An [`Order`](model::Order) is rendered by a [`Renderer`](renderer::Renderer)
//! chosen at call time. Renderers are looked up by format key in a
//! [`RendererRegistry`](registry::RendererRegistry) and injected into a
//! [`ReceiptService`](service::ReceiptService), which depends on nothing but
//! the `Renderer` trait.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Open for Extension
//! Supporting a new format means writing one new `Renderer` and registering it.
//! No existing renderer, service or orchestrator changes. The set of supported
//! formats is registry state, not a chain of `if format == ...` branches.
//!
//! ### Dependency Inversion
//! `ReceiptService` is the high-level policy ("print this order's receipt").
//! It receives an already-resolved `Arc<dyn Renderer>` and never sees the
//! registry or a concrete renderer type.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer has its own error type: [`RenderError`](renderer::RenderError)
//! for renderers, [`RegistryError`](registry::RegistryError) for lookups and
//! registrations. [`ReceiptError`](error::ReceiptError) unifies them for
//! callers through `#[from]` conversions.
//!
//! ### 2. Concurrency Model
//! Rendering is synchronous and CPU-bound. The registry guards its map with a
//! single `RwLock` so it can be shared behind `Arc` and still accept new
//! formats at runtime. [`ReceiptSystem::print_batch`](lifecycle::ReceiptSystem::print_batch)
//! fans jobs out onto Tokio's blocking pool.
//!
//! ### 3. Observability
//! `tracing` everywhere, with spans around every printed receipt. See
//! [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: the immutable [`Order`](model::Order).
//! - [`renderer`]: the `Renderer` trait, built-in formats, and a mock for tests.
//! - [`registry`]: format key to renderer lookup.
//! - [`service`]: `ReceiptService`, order + renderer = receipt.
//! - [`lifecycle`]: configuration, wiring, fallback and batch printing.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Fall back to pdf for unknown formats, 40-column paper
//! RECEIPT_FALLBACK_FORMAT=pdf RECEIPT_PAPER_WIDTH=40 cargo run
//! ```

pub mod error;
pub mod lifecycle;
pub mod model;
pub mod registry;
pub mod renderer;
pub mod service;
