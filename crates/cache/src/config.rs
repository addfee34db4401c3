//! Cleanup configuration with env and file overrides
use crate::errors::{CacheError, Result};
use dirsweep_utils::XdgPaths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the target size in megabytes
pub const TARGET_SIZE_ENV: &str = "DIRSWEEP_TARGET_SIZE_MB";
/// Environment variable overriding the cache directory
pub const CACHE_DIR_ENV: &str = "DIRSWEEP_CACHE_DIR";

/// Default retained size: 5 GB
pub const DEFAULT_TARGET_SIZE_MB: u64 = 5 * 1024;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Settings for a size-bounded cache sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Maximum retained size in whole megabytes
    pub target_size_mb: u64,
    /// Cache directory, defaults to the XDG cache dir
    pub base_dir: Option<PathBuf>,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            target_size_mb: DEFAULT_TARGET_SIZE_MB,
            base_dir: None,
        }
    }
}

impl CleanupConfig {
    /// Parse a JSON document, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CacheError::configuration(format!("invalid cleanup config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CacheError::io(path, "read config", e))?;
        Self::from_json_str(&contents)
    }

    /// Defaults overridden by `DIRSWEEP_TARGET_SIZE_MB` and `DIRSWEEP_CACHE_DIR`
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(TARGET_SIZE_ENV) {
            self.target_size_mb = raw.trim().parse().map_err(|e| {
                CacheError::configuration(format!("{TARGET_SIZE_ENV}={raw:?} is not a size: {e}"))
            })?;
        }

        if let Some(dir) = lookup(CACHE_DIR_ENV) {
            if !dir.is_empty() {
                self.base_dir = Some(PathBuf::from(dir));
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Reject targets whose byte value does not fit in a `u64`
    pub fn validate(&self) -> Result<()> {
        if self.target_size_mb.checked_mul(BYTES_PER_MB).is_none() {
            return Err(CacheError::configuration(format!(
                "target size of {} MB overflows a byte count",
                self.target_size_mb
            )));
        }
        Ok(())
    }

    /// Target budget in bytes
    pub fn target_size_bytes(&self) -> u64 {
        target_size_bytes(self.target_size_mb)
    }

    /// The configured directory, or the XDG cache directory
    pub fn resolve_base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(XdgPaths::cache_dir)
    }
}

/// Convert a whole-megabyte setting into bytes, saturating on overflow
pub fn target_size_bytes(target_size_mb: u64) -> u64 {
    target_size_mb.saturating_mul(BYTES_PER_MB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CleanupConfig::default();
        assert_eq!(config.target_size_mb, 5120);
        assert_eq!(config.target_size_bytes(), 5120 * 1024 * 1024);
        assert!(config.resolve_base_dir().ends_with("dirsweep"));
    }

    #[test]
    fn test_json_partial_document_uses_defaults() {
        let config = CleanupConfig::from_json_str(r#"{ "target_size_mb": 15 }"#).unwrap();
        assert_eq!(config.target_size_mb, 15);
        assert_eq!(config.base_dir, None);
    }

    #[test]
    fn test_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cleanup.json");
        std::fs::write(
            &path,
            r#"{ "target_size_mb": 1, "base_dir": "/srv/cache" }"#,
        )
        .unwrap();

        let config = CleanupConfig::from_json_file(&path).unwrap();
        assert_eq!(config.target_size_bytes(), 1024 * 1024);
        assert_eq!(config.resolve_base_dir(), PathBuf::from("/srv/cache"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = CleanupConfig::from_json_file(&temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(CacheError::Io { .. })));
    }

    #[test]
    fn test_invalid_json_is_configuration_error() {
        let result = CleanupConfig::from_json_str(r#"{ "target_size_mb": "lots" }"#);
        assert!(matches!(result, Err(CacheError::Configuration { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let config = CleanupConfig::default()
            .with_overrides(lookup(&[
                (TARGET_SIZE_ENV, " 64 "),
                (CACHE_DIR_ENV, "/tmp/build-cache"),
            ]))
            .unwrap();
        assert_eq!(config.target_size_mb, 64);
        assert_eq!(config.base_dir, Some(PathBuf::from("/tmp/build-cache")));
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let result = CleanupConfig::default().with_overrides(lookup(&[(TARGET_SIZE_ENV, "ten")]));
        assert!(matches!(result, Err(CacheError::Configuration { .. })));
    }

    #[test]
    fn test_overflowing_target_rejected() {
        let config = CleanupConfig {
            target_size_mb: u64::MAX,
            base_dir: None,
        };
        assert!(config.validate().is_err());
        assert_eq!(config.target_size_bytes(), u64::MAX);
    }
}
