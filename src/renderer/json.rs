//! JSON renderer: structured output for tooling integration.

use crate::model::Order;
use crate::renderer::{Output, RenderError, Renderer};

pub const FORMAT: &str = "json";

/// Serializes the whole order with `serde_json`. Accepts any order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn format(&self) -> &str {
        FORMAT
    }

    fn render(&self, order: &Order) -> Result<Output, RenderError> {
        serde_json::to_string_pretty(order)
            .map(Output::Text)
            .map_err(|e| RenderError::new(FORMAT, e.to_string()))
    }
}
