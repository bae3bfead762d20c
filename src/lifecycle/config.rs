//! Runtime configuration for [`ReceiptSystem`](super::ReceiptSystem).

use crate::registry::RegistrationPolicy;
use crate::renderer::paper;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const ENV_STRICT_REGISTRATION: &str = "RECEIPT_STRICT_REGISTRATION";
pub const ENV_PAPER_WIDTH: &str = "RECEIPT_PAPER_WIDTH";
pub const ENV_FALLBACK_FORMAT: &str = "RECEIPT_FALLBACK_FORMAT";

/// Startup settings for the receipt system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// How the registry treats a second registration for the same key.
    pub policy: RegistrationPolicy,
    /// Column width of the built-in paper renderer.
    pub paper_width: usize,
    /// Format to retry with when the requested one is not registered.
    pub fallback_format: Option<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            policy: RegistrationPolicy::Overwrite,
            paper_width: paper::DEFAULT_WIDTH,
            fallback_format: None,
        }
    }
}

impl SystemConfig {
    /// Reads the configuration from the process environment.
    ///
    /// - `RECEIPT_STRICT_REGISTRATION`: `true`/`1`/`yes` or `false`/`0`/`no`
    /// - `RECEIPT_PAPER_WIDTH`: positive integer
    /// - `RECEIPT_FALLBACK_FORMAT`: format key, empty means none
    ///
    /// Values that do not parse are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_STRICT_REGISTRATION) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.policy = RegistrationPolicy::Strict,
                "0" | "false" | "no" => config.policy = RegistrationPolicy::Overwrite,
                _ => warn!(var = ENV_STRICT_REGISTRATION, value = %raw, "Ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(ENV_PAPER_WIDTH) {
            match raw.trim().parse::<usize>() {
                Ok(width) if width > 0 => config.paper_width = width,
                _ => warn!(var = ENV_PAPER_WIDTH, value = %raw, "Ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(ENV_FALLBACK_FORMAT) {
            let format = raw.trim();
            config.fallback_format = (!format.is_empty()).then(|| format.to_string());
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup(&[])), SystemConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = SystemConfig::from_lookup(lookup(&[
            (ENV_STRICT_REGISTRATION, "TRUE"),
            (ENV_PAPER_WIDTH, "40"),
            (ENV_FALLBACK_FORMAT, " pdf "),
        ]));

        assert_eq!(config.policy, RegistrationPolicy::Strict);
        assert_eq!(config.paper_width, 40);
        assert_eq!(config.fallback_format.as_deref(), Some("pdf"));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = SystemConfig::from_lookup(lookup(&[
            (ENV_STRICT_REGISTRATION, "maybe"),
            (ENV_PAPER_WIDTH, "wide"),
            (ENV_FALLBACK_FORMAT, ""),
        ]));

        assert_eq!(config, SystemConfig::default());
    }
}
