//! # Renderers
//!
//! A [`Renderer`] turns an [`Order`] into an [`Output`] for exactly one format.
//! Each built-in format lives in its own module and shares nothing with the
//! others except this trait:
//!
//! - [`pdf::PdfRenderer`]: PDF job description (`"pdf"`)
//! - [`paper::PaperRenderer`]: fixed-width paper slip (`"paper"`)
//! - [`json::JsonRenderer`]: machine-readable JSON (`"json"`)
//!
//! New formats are added by implementing [`Renderer`] and registering the
//! implementation with a [`RendererRegistry`](crate::registry::RendererRegistry).
//! Nothing else has to change.
//!
//! ```rust
//! use receipt_dispatch::model::Order;
//! use receipt_dispatch::renderer::{Output, RenderError, Renderer};
//!
//! #[derive(Debug)]
//! struct Shouting;
//!
//! impl Renderer for Shouting {
//!     fn format(&self) -> &str {
//!         "shout"
//!     }
//!
//!     fn render(&self, order: &Order) -> Result<Output, RenderError> {
//!         let item = RenderError::require_field(order, self.format(), "item")?;
//!         Ok(Output::Text(format!("ORDER {}: {}!", order.id(), item.to_uppercase())))
//!     }
//! }
//!
//! let order = Order::builder(1).field("item", "kite").build();
//! assert_eq!(Shouting.render(&order).unwrap().as_text(), Some("ORDER 1: KITE!"));
//! ```

pub mod error;
pub mod json;
pub mod mock;
pub mod paper;
pub mod pdf;

pub use error::*;
pub use json::JsonRenderer;
pub use paper::PaperRenderer;
pub use pdf::PdfRenderer;

use crate::model::Order;
use std::fmt::{self, Debug, Display};

/// Capability that converts an [`Order`] into a format-specific [`Output`].
///
/// Implementations must not mutate the order (they only ever see `&Order`)
/// and must return either a complete output or a [`RenderError`], never a
/// partial result. They are shared across threads behind `Arc`, hence the
/// `Send + Sync` bound.
pub trait Renderer: Send + Sync + Debug {
    /// Format key reported in [`RenderError`]s raised by this renderer.
    fn format(&self) -> &str;

    fn render(&self, order: &Order) -> Result<Output, RenderError>;
}

/// Opaque rendering result. Delivering it anywhere is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Bytes(Vec<u8>),
}

impl Output {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Text(text) => text.as_bytes(),
            Output::Bytes(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Output::Text(text) => text.into_bytes(),
            Output::Bytes(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}
