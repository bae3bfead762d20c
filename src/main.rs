//! Demo driver: prints a few receipts the way an application would.
//!
//! 1. Configures the [`ReceiptSystem`] from the environment.
//! 2. Prints single receipts in `pdf` and `paper` format.
//! 3. Asks for an unregistered format (`fax`) and recovers.
//! 4. Registers a new format at runtime and prints a concurrent batch.

use receipt_dispatch::error::ReceiptError;
use receipt_dispatch::lifecycle::tracing::setup_tracing;
use receipt_dispatch::lifecycle::{PrintJob, ReceiptSystem};
use receipt_dispatch::model::Order;
use receipt_dispatch::renderer::{Output, RenderError, Renderer};
use std::sync::Arc;
use tracing::{error, info, Instrument};

/// A format the library does not ship: a single-line SMS summary.
#[derive(Debug)]
struct SmsRenderer;

impl Renderer for SmsRenderer {
    fn format(&self) -> &str {
        "sms"
    }

    fn render(&self, order: &Order) -> Result<Output, RenderError> {
        let item = RenderError::require_field(order, self.format(), "item")?;
        Ok(Output::Text(format!("Order {} confirmed: {}", order.id(), item)))
    }
}

#[tokio::main]
async fn main() -> Result<(), ReceiptError> {
    setup_tracing();

    info!("Starting receipt demo");
    let system = ReceiptSystem::from_env();

    let laptop = Order::builder(101).field("item", "Laptop").build();
    let book = Order::builder(123)
        .field("item", "Book")
        .field("quantity", "2")
        .build();

    let span = tracing::info_span!("single_receipts");
    {
        let _guard = span.enter();
        println!("{}", system.print(&laptop, "pdf")?);
        println!("{}", system.print(&book, "paper")?);
    }

    match system.print_or_fallback(&laptop, "fax") {
        Ok(output) => println!("{}", output),
        Err(e) => error!(error = %e, "Fax receipt failed"),
    }

    system.register("sms", Arc::new(SmsRenderer))?;

    let span = tracing::info_span!("batch");
    let jobs = vec![
        PrintJob::new(laptop.clone(), "sms"),
        PrintJob::new(book.clone(), "sms"),
        PrintJob::new(book, "json"),
        PrintJob::new(Order::builder(500).build(), "pdf"),
    ];
    let results = system.print_batch(jobs).instrument(span).await;

    for result in results {
        match result {
            Ok(output) => println!("{}", output),
            Err(e) => error!(error = %e, "Batch receipt failed"),
        }
    }

    info!("Receipt demo completed");
    Ok(())
}
