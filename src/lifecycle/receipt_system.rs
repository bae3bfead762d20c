use crate::error::ReceiptError;
use crate::lifecycle::SystemConfig;
use crate::model::Order;
use crate::registry::{self, RendererRegistry};
use crate::renderer::{Output, PaperRenderer, Renderer};
use crate::service::ReceiptService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn, Span};

/// One unit of work for [`ReceiptSystem::print_batch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJob {
    pub order: Order,
    pub format: String,
}

impl PrintJob {
    pub fn new(order: Order, format: impl Into<String>) -> Self {
        Self {
            order,
            format: format.into(),
        }
    }
}

/// The caller-side orchestrator for receipt printing.
///
/// `ReceiptSystem` is responsible for:
/// - **Setup**: building the registry with the built-in formats from [`SystemConfig`]
/// - **Resolution**: turning a format key into a renderer
/// - **Injection**: handing order + renderer to a [`ReceiptService`]
/// - **Recovery**: retrying unknown formats with the configured fallback
///
/// The registry is shared behind `Arc`, so clones of the system (and the
/// tasks spawned by [`print_batch`](Self::print_batch)) all see runtime
/// registrations.
///
/// # Example
///
/// ```rust
/// use receipt_dispatch::lifecycle::{ReceiptSystem, SystemConfig};
/// use receipt_dispatch::model::Order;
///
/// let system = ReceiptSystem::new(SystemConfig::default());
/// let order = Order::builder(101).field("item", "Laptop").build();
///
/// let receipt = system.print(&order, "pdf").unwrap();
/// assert!(receipt.to_string().contains("Laptop"));
/// assert!(system.print(&order, "fax").unwrap_err().is_unsupported_format());
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptSystem {
    registry: Arc<RendererRegistry>,
    config: SystemConfig,
}

impl ReceiptSystem {
    /// Creates a system whose registry holds the built-in formats.
    pub fn new(config: SystemConfig) -> Self {
        let paper = PaperRenderer::with_width(config.paper_width);
        let registry = RendererRegistry::with_renderers(config.policy, registry::builtin_renderers(paper));
        info!(formats = ?registry.formats(), policy = ?config.policy, "Receipt system ready");
        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    /// Creates a system configured from `RECEIPT_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(SystemConfig::from_env())
    }

    /// Creates a system around an existing (possibly shared) registry.
    pub fn with_registry(registry: Arc<RendererRegistry>, config: SystemConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<RendererRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Adds a format at runtime.
    pub fn register(&self, key: impl Into<String>, renderer: Arc<dyn Renderer>) -> Result<(), ReceiptError> {
        Ok(self.registry.register(key, renderer)?)
    }

    /// Removes a format at runtime.
    pub fn unregister(&self, key: &str) -> bool {
        self.registry.unregister(key)
    }

    /// Resolves `format` and prints the receipt for `order` with it.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub fn print(&self, order: &Order, format: &str) -> Result<Output, ReceiptError> {
        let renderer = self.registry.resolve(format)?;
        Ok(ReceiptService::new(order, renderer).print_receipt()?)
    }

    /// Like [`print`](Self::print), but an unsupported format is retried once
    /// with [`SystemConfig::fallback_format`]. Render errors are never retried.
    pub fn print_or_fallback(&self, order: &Order, format: &str) -> Result<Output, ReceiptError> {
        match self.print(order, format) {
            Err(e) if e.is_unsupported_format() => match self.config.fallback_format.as_deref() {
                Some(fallback) if fallback != format => {
                    warn!(requested = format, fallback, "Unsupported format, using fallback");
                    self.print(order, fallback)
                }
                _ => Err(e),
            },
            result => result,
        }
    }

    /// Renders every job concurrently on the blocking pool.
    ///
    /// Results come back in job order. Each job goes through
    /// [`print_or_fallback`](Self::print_or_fallback); a job whose task
    /// panics yields [`ReceiptError::TaskFailed`] without affecting the others.
    pub async fn print_batch(&self, jobs: Vec<PrintJob>) -> Vec<Result<Output, ReceiptError>> {
        info!(jobs = jobs.len(), "Printing batch");

        let handles: Vec<_> = jobs
            .into_iter()
            .map(|job| {
                let system = self.clone();
                let span = Span::current();
                tokio::task::spawn_blocking(move || {
                    let _guard = span.enter();
                    system.print_or_fallback(&job.order, &job.format)
                })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    error!(error = %e, "Receipt task failed");
                    Err(ReceiptError::TaskFailed(e.to_string()))
                }
            };
            results.push(result);
        }
        results
    }
}

impl Default for ReceiptSystem {
    fn default() -> Self {
        Self::new(SystemConfig::default())
    }
}
