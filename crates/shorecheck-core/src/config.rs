//! Configuration management for shorecheck
//!
//! This module provides the runner configuration, loaded from
//! `shorecheck.toml` in the working directory. Every value has a default so
//! the runner works out of the box against a locally served app.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Result;

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "shorecheck.toml";

/// Runner-level shorecheck configuration
///
/// Loaded from `shorecheck.toml` or built from defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Base URL of the target application
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound for every blocking wait, in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Poll interval for client-side predicate waits, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Browser launch settings
    #[serde(default)]
    pub browser: BrowserSettings,

    /// Screenshot artifact paths
    #[serde(default)]
    pub screenshots: ScreenshotPaths,

    /// Preflight reachability probe
    #[serde(default)]
    pub preflight: PreflightSettings,
}

/// Browser launch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Run in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

/// Fixed paths for the two screenshot artifacts, overwritten on each run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotPaths {
    /// Full-page screenshot taken after the popup opens
    #[serde(default = "default_popup_screenshot")]
    pub popup: PathBuf,

    /// Full-page screenshot taken after the itinerary update
    #[serde(default = "default_itinerary_screenshot")]
    pub itinerary: PathBuf,
}

/// Preflight reachability probe settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreflightSettings {
    /// Probe the base URL before launching the browser
    #[serde(default = "default_preflight_enabled")]
    pub enabled: bool,

    /// How long to keep probing before giving up, in seconds
    #[serde(default = "default_preflight_timeout_seconds")]
    pub timeout_seconds: u64,
}

// Default value providers
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

fn default_popup_screenshot() -> PathBuf {
    PathBuf::from("verification_popup.png")
}

fn default_itinerary_screenshot() -> PathBuf {
    PathBuf::from("verification_itinerary.png")
}

fn default_preflight_enabled() -> bool {
    true
}

fn default_preflight_timeout_seconds() -> u64 {
    10
}

impl RunnerConfig {
    /// Load configuration from a `shorecheck.toml` file or use defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content).map_err(|e| {
                crate::ShorecheckError::Config(format!("Failed to parse config file: {}", e))
            })?)
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `shorecheck.toml`
    pub fn write_default(dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        let config = Self::default();
        let content = toml::to_string_pretty(&config).map_err(|e| {
            crate::ShorecheckError::Config(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            poll_interval_ms: default_poll_interval_ms(),
            browser: BrowserSettings::default(),
            screenshots: ScreenshotPaths::default(),
            preflight: PreflightSettings::default(),
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Default for ScreenshotPaths {
    fn default() -> Self {
        Self {
            popup: default_popup_screenshot(),
            itinerary: default_itinerary_screenshot(),
        }
    }
}

impl Default for PreflightSettings {
    fn default() -> Self {
        Self {
            enabled: default_preflight_enabled(),
            timeout_seconds: default_preflight_timeout_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.poll_interval_ms, 100);
        assert!(config.browser.headless);
        assert_eq!(
            config.screenshots.popup,
            PathBuf::from("verification_popup.png")
        );
        assert_eq!(
            config.screenshots.itinerary,
            PathBuf::from("verification_itinerary.png")
        );
        assert!(config.preflight.enabled);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunnerConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_write_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = RunnerConfig::write_default(dir.path()).unwrap();
        assert!(path.exists());

        let config = RunnerConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.browser.headless);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "base_url = \"http://127.0.0.1:9999\"\n\n[browser]\nheadless = false\n",
        )
        .unwrap();

        let config = RunnerConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert!(!config.browser.headless);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.preflight.timeout_seconds, 10);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "timeout_seconds = \"soon\"").unwrap();

        let result = RunnerConfig::load_or_default(dir.path());
        assert!(result.is_err());
    }
}
