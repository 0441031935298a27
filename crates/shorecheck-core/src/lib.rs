//! # shorecheck-core
//!
//! Core types for the shorecheck UI verification runner.
//!
//! Shorecheck drives a headless browser against a running instance of the
//! beach-discovery web app and verifies a fixed checklist of UI features.
//! This crate holds the pieces shared by every other crate:
//!
//! - Unified error type ([`ShorecheckError`]) and `Result` alias
//! - Runner configuration loaded from `shorecheck.toml` ([`RunnerConfig`])
//! - Structured run report ([`RunReport`], [`CheckReport`])

mod config;
mod error;
mod report;

pub use config::{
    BrowserSettings, PreflightSettings, RunnerConfig, ScreenshotPaths, CONFIG_FILE_NAME,
};
pub use error::{Result, ShorecheckError};
pub use report::{CheckOutcome, CheckReport, RunReport};
