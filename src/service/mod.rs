//! # Receipt Service
//!
//! The high-level policy: "print the receipt for this order". It is handed
//! an order and an already-resolved renderer and knows nothing about the
//! registry or any concrete renderer type.

use crate::model::Order;
use crate::renderer::{Output, RenderError, Renderer};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Composes exactly one [`Order`] with one [`Renderer`].
///
/// Both dependencies are injected at construction and never change. The
/// service keeps no state of its own, so [`print_receipt`](Self::print_receipt)
/// can be called any number of times with the same result for a pure renderer.
#[derive(Debug, Clone)]
pub struct ReceiptService<'a> {
    order: &'a Order,
    renderer: Arc<dyn Renderer>,
}

impl<'a> ReceiptService<'a> {
    pub fn new(order: &'a Order, renderer: Arc<dyn Renderer>) -> Self {
        Self { order, renderer }
    }

    pub fn order(&self) -> &Order {
        self.order
    }

    pub fn format(&self) -> &str {
        self.renderer.format()
    }

    /// Renders the held order with the injected renderer.
    ///
    /// Any [`RenderError`] is returned unchanged; there is no retry here.
    #[instrument(skip(self), fields(order_id = %self.order.id(), format = self.renderer.format()))]
    pub fn print_receipt(&self) -> Result<Output, RenderError> {
        debug!(order = ?self.order, "print_receipt called");
        let output = self.renderer.render(self.order)?;
        info!(bytes = output.len(), "Receipt rendered");
        Ok(output)
    }
}
