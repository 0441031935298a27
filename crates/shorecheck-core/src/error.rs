//! Unified error types for shorecheck

use thiserror::Error;

/// Unified error type for all shorecheck operations
#[derive(Error, Debug)]
pub enum ShorecheckError {
    // Browser lifecycle errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    // Wait/lookup errors
    #[error("Timed out waiting for {0}")]
    WaitTimeout(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Selector '{selector}' matched {count} elements, expected exactly one")]
    AmbiguousSelector { selector: String, count: usize },

    // Artifact errors
    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // Environment errors
    #[error("Target application unreachable: {0}")]
    Preflight(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using ShorecheckError
pub type Result<T> = std::result::Result<T, ShorecheckError>;

impl ShorecheckError {
    /// Whether this error stems from the environment rather than the
    /// application under test (the app not serving at all).
    pub fn is_environment(&self) -> bool {
        matches!(self, ShorecheckError::Preflight(_))
    }
}
