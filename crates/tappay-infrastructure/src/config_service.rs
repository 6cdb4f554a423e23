//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from a `config.toml`, caching the result to
//! avoid repeated file I/O. A missing or unreadable file falls back to
//! the built-in fixture defaults so the mock always starts.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tappay_core::TapPayError;
use tappay_core::config::AppConfig;

/// Configuration service that loads and caches the app configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service reading from the given path.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|err| {
            tracing::warn!(target: "config", error = %err, "Falling back to defaults");
            AppConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Result<AppConfig, TapPayError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(&self.path)
            .map_err(|err| TapPayError::config(format!("read {}: {err}", self.path.display())))?;
        toml::from_str(&text)
            .map_err(|err| TapPayError::config(format!("parse {}: {err}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config(), AppConfig::default());
    }

    #[test]
    fn test_loads_overrides_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "initial_balance = \"500\"\nscan_ms = 10\n").unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config();
        assert_eq!(config.initial_balance, dec!(500));
        assert_eq!(config.scan_ms, 10);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "initial_balance = [not toml").unwrap();

        let service = ConfigService::with_path(&path);
        assert_eq!(service.get_config(), AppConfig::default());
    }

    #[test]
    fn test_cache_and_invalidate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "scan_ms = 10\n").unwrap();

        let service = ConfigService::with_path(&path);
        assert_eq!(service.get_config().scan_ms, 10);

        // Cached: file changes are not visible until invalidation.
        fs::write(&path, "scan_ms = 20\n").unwrap();
        assert_eq!(service.get_config().scan_ms, 10);

        service.invalidate_cache();
        assert_eq!(service.get_config().scan_ms, 20);
    }
}
