//! Browser automation for the shorecheck UI verification runner
//!
//! This crate wraps the Chrome DevTools Protocol (via `headless_chrome`) in
//! the small capability set the verification runner needs: navigate, wait
//! for selectors, query visibility, click, read rendered markup, poll
//! client-side predicates and capture full-page screenshots.
//!
//! # Example
//!
//! ```no_run
//! use shorecheck_browser::{BrowserSession, PageDriver};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = BrowserSession::launch().await?;
//!     session.navigate("http://localhost:8000").await?;
//!     session.wait_for_selector("#search-input").await?;
//!     session.screenshot(Path::new("page.png")).await?;
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium installed
//! - For connecting to an existing browser: `chrome --remote-debugging-port=9222`
//!
//! # Architecture
//!
//! - [`browser`]: Browser lifecycle and session management
//! - [`driver`]: The [`PageDriver`] capability trait (mockable in tests)
//! - [`screenshot`]: Full-page screenshot capture
//! - [`error`]: Error re-exports

pub mod browser;
pub mod driver;
pub mod error;
pub mod screenshot;

// Re-export commonly used types
pub use browser::{BrowserConfig, BrowserSession};
pub use driver::PageDriver;
pub use error::{BrowserError, Result};
pub use screenshot::{capture_full_page, save_full_page};
