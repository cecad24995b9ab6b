//! Flash bag configuration: storage key, bag name, log file.
//! Loaded from FLASH_STORAGE_KEY, FLASH_BAG_NAME and LOG_FILE.

use anyhow::Result;
use std::env;

/// Session key the bag's generations are stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "_sf2_flashes";

/// Bag name unless configured otherwise.
pub const DEFAULT_BAG_NAME: &str = "flashes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashConfig {
    pub storage_key: String,
    pub bag_name: String,
    pub log_file: Option<String>,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            bag_name: DEFAULT_BAG_NAME.to_string(),
            log_file: None,
        }
    }
}

impl FlashConfig {
    /// Load from environment variables. Unset or blank values fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Builds the config from an arbitrary key lookup (env, a parsed .env, a test map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            storage_key: non_blank("FLASH_STORAGE_KEY")
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            bag_name: non_blank("FLASH_BAG_NAME").unwrap_or_else(|| DEFAULT_BAG_NAME.to_string()),
            log_file: non_blank("LOG_FILE"),
        }
    }

    /// Default config with a custom storage key.
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FlashConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, FlashConfig::default());
        assert_eq!(config.storage_key, "_sf2_flashes");
        assert_eq!(config.bag_name, "flashes");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = FlashConfig::from_lookup(lookup_from(&[
            ("FLASH_STORAGE_KEY", "_app_flashes"),
            ("FLASH_BAG_NAME", "notices"),
            ("LOG_FILE", "flash.log"),
        ]));
        assert_eq!(config.storage_key, "_app_flashes");
        assert_eq!(config.bag_name, "notices");
        assert_eq!(config.log_file.as_deref(), Some("flash.log"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = FlashConfig::from_lookup(lookup_from(&[
            ("FLASH_STORAGE_KEY", "  "),
            ("FLASH_BAG_NAME", ""),
            ("LOG_FILE", ""),
        ]));
        assert_eq!(config, FlashConfig::default());
    }

    #[test]
    fn test_with_storage_key() {
        let config = FlashConfig::with_storage_key("_admin_flashes");
        assert_eq!(config.storage_key, "_admin_flashes");
        assert_eq!(config.bag_name, DEFAULT_BAG_NAME);
    }
}
