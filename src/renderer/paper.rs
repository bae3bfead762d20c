//! Paper renderer: a fixed-width slip for receipt printers.
//!
//! ```text
//! ================================
//!            ORDER #123
//! --------------------------------
//! item                        Book
//! quantity                       2
//! ================================
//! ```

use crate::model::Order;
use crate::renderer::{Output, RenderError, Renderer};

pub const FORMAT: &str = "paper";
pub const DEFAULT_WIDTH: usize = 32;
pub const MIN_WIDTH: usize = 20;

/// Renders an order as a fixed-width paper slip.
///
/// Every row is `key` flush left and `value` flush right. A row that cannot
/// fit in the configured width is an error rather than being cut off.
#[derive(Debug, Clone, Copy)]
pub struct PaperRenderer {
    width: usize,
}

impl PaperRenderer {
    /// Widths below [`MIN_WIDTH`] are raised to it.
    pub fn with_width(width: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn row(&self, key: &str, value: &str) -> Result<String, RenderError> {
        if key.chars().chain(value.chars()).any(char::is_control) {
            return Err(RenderError::new(
                FORMAT,
                format!("field `{}` contains a control character", key.escape_debug()),
            ));
        }
        let used = key.chars().count() + value.chars().count();
        // at least one space between key and value
        if used + 1 > self.width {
            return Err(RenderError::new(
                FORMAT,
                format!("field `{}` does not fit in {} columns", key, self.width),
            ));
        }
        Ok(format!("{}{}{}\n", key, " ".repeat(self.width - used), value))
    }
}

impl Default for PaperRenderer {
    fn default() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }
}

impl Renderer for PaperRenderer {
    fn format(&self) -> &str {
        FORMAT
    }

    fn render(&self, order: &Order) -> Result<Output, RenderError> {
        let item = RenderError::require_field(order, FORMAT, "item")?;
        let width = self.width;

        let mut out = String::new();
        out.push_str(&"=".repeat(width));
        out.push('\n');
        out.push_str(format!("{:^width$}", format!("ORDER #{}", order.id())).trim_end());
        out.push('\n');
        out.push_str(&"-".repeat(width));
        out.push('\n');
        out.push_str(&self.row("item", item)?);
        for (key, value) in order.fields().filter(|(key, _)| *key != "item") {
            out.push_str(&self.row(key, value)?);
        }
        out.push_str(&"=".repeat(width));
        out.push('\n');
        Ok(Output::Text(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_slip_layout() {
        let order = Order::builder(123)
            .field("item", "Book")
            .field("quantity", "2")
            .build();
        let output = PaperRenderer::default().render(&order).unwrap();

        let expected = "\
================================
           ORDER #123
--------------------------------
item                        Book
quantity                       2
================================
";
        assert_eq!(output.as_text(), Some(expected));
    }

    #[test]
    fn test_every_row_has_configured_width() {
        let order = Order::builder(5).field("item", "Mug").field("colour", "blue").build();
        let renderer = PaperRenderer::with_width(24);
        let output = renderer.render(&order).unwrap();
        let text = output.as_text().unwrap();

        for line in text.lines().filter(|l| !l.contains("ORDER")) {
            assert_eq!(line.chars().count(), 24, "line {:?}", line);
        }
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(PaperRenderer::with_width(4).width(), MIN_WIDTH);
        assert_eq!(PaperRenderer::default().width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_overlong_value_is_rejected() {
        let order = Order::builder(8)
            .field("item", "An extremely long product description")
            .build();
        let err = PaperRenderer::default().render(&order).unwrap_err();

        assert_eq!(err.format, "paper");
        assert!(err.reason.contains("`item`"));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let renderer = PaperRenderer::default();

        let order = Order::builder(1).field("item", "Pen\nINJECTED ROW").build();
        let err = renderer.render(&order).unwrap_err();
        assert_eq!(err.format, "paper");
        assert!(err.reason.contains("`item`"));

        let order = Order::builder(2).field("item", "Pen").field("note\t", "x").build();
        assert!(renderer.render(&order).is_err());
    }

    #[test]
    fn test_paper_requires_item() {
        let order = Order::builder(8).build();
        assert!(PaperRenderer::default().render(&order).is_err());
    }
}
