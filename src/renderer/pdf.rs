//! PDF renderer: describes the PDF document a downstream generator should produce.

use crate::model::Order;
use crate::renderer::{Output, RenderError, Renderer};

pub const FORMAT: &str = "pdf";

/// Renders an order as a PDF job description.
///
/// The first line names the job, the second the ordered item, then every
/// other field follows in key order. Requires the `item` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl Renderer for PdfRenderer {
    fn format(&self) -> &str {
        FORMAT
    }

    fn render(&self, order: &Order) -> Result<Output, RenderError> {
        let item = RenderError::require_field(order, FORMAT, "item")?;

        let mut out = format!("Generating PDF receipt for order {}\n", order.id());
        out.push_str(&format!("item: {}\n", item));
        for (key, value) in order.fields().filter(|(key, _)| *key != "item") {
            out.push_str(&format!("{}: {}\n", key, value));
        }
        Ok(Output::Text(out))
    }
}
