//! # Renderer Registry
//!
//! Maps format keys (`"pdf"`, `"paper"`, ...) to shared [`Renderer`] instances.
//!
//! ## Concurrency Model
//!
//! All operations take `&self`. The key/renderer map sits behind a single
//! [`RwLock`], so a registry wrapped in `Arc` can be read by many callers and
//! still accept new formats at runtime. Each operation is one map access
//! under the lock; readers never see a half-applied registration.
//!
//! Renderers are stored as `Arc<dyn Renderer>`, so a resolved renderer stays
//! usable even if its key is unregistered or replaced afterwards.

pub mod error;

pub use error::*;

use crate::renderer::{self, Renderer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// What `register` does when the key is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationPolicy {
    /// The new renderer silently replaces the old one.
    #[default]
    Overwrite,
    /// Registration fails with [`RegistryError::AlreadyRegistered`].
    Strict,
}

/// Lookup table from format key to renderer.
///
/// Keys are case-sensitive: `"pdf"` and `"PDF"` are different formats.
#[derive(Debug, Default)]
pub struct RendererRegistry {
    policy: RegistrationPolicy,
    renderers: RwLock<HashMap<String, Arc<dyn Renderer>>>,
}

impl RendererRegistry {
    /// Creates an empty registry with the default (overwrite) policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given policy.
    pub fn with_policy(policy: RegistrationPolicy) -> Self {
        Self {
            policy,
            renderers: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry holding `renderers`. Later entries with a repeated
    /// key replace earlier ones regardless of `policy`, which only governs
    /// subsequent [`register`](Self::register) calls.
    pub fn with_renderers<K>(
        policy: RegistrationPolicy,
        renderers: impl IntoIterator<Item = (K, Arc<dyn Renderer>)>,
    ) -> Self
    where
        K: Into<String>,
    {
        Self {
            policy,
            renderers: RwLock::new(renderers.into_iter().map(|(k, r)| (k.into(), r)).collect()),
        }
    }

    /// Creates a registry pre-populated with the built-in formats:
    /// `pdf`, `paper` (default width) and `json`.
    pub fn with_builtin(policy: RegistrationPolicy) -> Self {
        Self::with_renderers(policy, builtin_renderers(renderer::PaperRenderer::default()))
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Stores `renderer` under `key`.
    ///
    /// Under [`RegistrationPolicy::Overwrite`] this never fails and the last
    /// registration for a key wins. Under [`RegistrationPolicy::Strict`] an
    /// existing key is left untouched and an error is returned.
    pub fn register(&self, key: impl Into<String>, renderer: Arc<dyn Renderer>) -> Result<(), RegistryError> {
        let key = key.into();
        let mut renderers = self.renderers.write().unwrap_or_else(PoisonError::into_inner);

        if self.policy == RegistrationPolicy::Strict && renderers.contains_key(&key) {
            warn!(format = %key, "Registration rejected, format already registered");
            return Err(RegistryError::AlreadyRegistered(key));
        }

        let replaced = renderers.insert(key.clone(), renderer).is_some();
        info!(format = %key, replaced, size = renderers.len(), "Registered renderer");
        Ok(())
    }

    /// Looks up the renderer registered under `key`.
    pub fn resolve(&self, key: &str) -> Result<Arc<dyn Renderer>, RegistryError> {
        let renderers = self.renderers.read().unwrap_or_else(PoisonError::into_inner);
        let found = renderers.get(key).cloned();
        debug!(format = key, found = found.is_some(), "Resolve");
        found.ok_or_else(|| RegistryError::UnsupportedFormat(key.to_string()))
    }

    /// Removes the renderer under `key`. Returns whether anything was removed.
    pub fn unregister(&self, key: &str) -> bool {
        let mut renderers = self.renderers.write().unwrap_or_else(PoisonError::into_inner);
        let removed = renderers.remove(key).is_some();
        if removed {
            info!(format = key, size = renderers.len(), "Unregistered renderer");
        }
        removed
    }

    pub fn contains(&self, key: &str) -> bool {
        self.renderers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// All registered format keys, sorted.
    pub fn formats(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .renderers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.renderers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The built-in renderers keyed by their format, with the given paper layout.
pub fn builtin_renderers(paper: renderer::PaperRenderer) -> Vec<(&'static str, Arc<dyn Renderer>)> {
    vec![
        (renderer::pdf::FORMAT, Arc::new(renderer::PdfRenderer) as Arc<dyn Renderer>),
        (renderer::paper::FORMAT, Arc::new(paper) as Arc<dyn Renderer>),
        (renderer::json::FORMAT, Arc::new(renderer::JsonRenderer) as Arc<dyn Renderer>),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;
    use crate::renderer::mock::MockRenderer;
    use crate::renderer::Output;

    fn text(s: &str) -> Output {
        Output::Text(s.to_string())
    }

    #[test]
    fn test_resolve_returns_registered_renderer() {
        let registry = RendererRegistry::new();
        registry
            .register("pdf", Arc::new(MockRenderer::returning("pdf", text("A"))))
            .unwrap();

        let renderer = registry.resolve("pdf").unwrap();
        let output = renderer.render(&Order::builder(1).build()).unwrap();
        assert_eq!(output, text("A"));
    }

    #[test]
    fn test_reregistering_overwrites() {
        let registry = RendererRegistry::new();
        registry.register("pdf", Arc::new(MockRenderer::returning("pdf", text("A")))).unwrap();
        registry.register("pdf", Arc::new(MockRenderer::returning("pdf", text("B")))).unwrap();

        let output = registry.resolve("pdf").unwrap().render(&Order::builder(1).build()).unwrap();
        assert_eq!(output, text("B"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_format_fails_without_changing_state() {
        let registry = RendererRegistry::with_builtin(RegistrationPolicy::Overwrite);
        let before = registry.formats();

        let err = registry.resolve("fax").unwrap_err();
        assert_eq!(err, RegistryError::UnsupportedFormat("fax".to_string()));
        assert_eq!(err.to_string(), "Unsupported format: fax");
        assert_eq!(registry.formats(), before);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let registry = RendererRegistry::with_builtin(RegistrationPolicy::Overwrite);
        assert!(registry.contains("pdf"));
        assert!(registry.resolve("PDF").is_err());
    }

    #[test]
    fn test_strict_policy_keeps_first_registration() {
        let registry = RendererRegistry::with_policy(RegistrationPolicy::Strict);
        registry.register("pdf", Arc::new(MockRenderer::returning("pdf", text("A")))).unwrap();

        let err = registry
            .register("pdf", Arc::new(MockRenderer::returning("pdf", text("B"))))
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered("pdf".to_string()));

        let output = registry.resolve("pdf").unwrap().render(&Order::builder(1).build()).unwrap();
        assert_eq!(output, text("A"));
    }

    #[test]
    fn test_unregister() {
        let registry = RendererRegistry::with_builtin(RegistrationPolicy::Overwrite);
        assert_eq!(registry.formats(), vec!["json", "paper", "pdf"]);

        assert!(registry.unregister("json"));
        assert!(!registry.unregister("json"));
        assert!(!registry.unregister("fax"));
        assert_eq!(registry.formats(), vec!["paper", "pdf"]);
        assert!(matches!(registry.resolve("json"), Err(RegistryError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_resolved_renderer_outlives_unregister() {
        let registry = RendererRegistry::with_builtin(RegistrationPolicy::Overwrite);
        let pdf = registry.resolve("pdf").unwrap();
        registry.unregister("pdf");

        let order = Order::builder(1).field("item", "Pen").build();
        assert!(pdf.render(&order).is_ok());
    }

    #[test]
    fn test_empty_registry() {
        let registry = RendererRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.policy(), RegistrationPolicy::Overwrite);
    }
}
