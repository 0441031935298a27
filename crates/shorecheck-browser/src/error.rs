//! Browser automation error types - re-exports the unified error from shorecheck-core
//!
//! All browser errors use the unified ShorecheckError type:
//! - Browser(String) - launch, CDP and click failures
//! - Navigation(String) - navigation failures and navigation timeouts
//! - WaitTimeout / ElementNotFound / AmbiguousSelector - wait and lookup failures
//! - Screenshot(String) - capture and artifact write failures
//!
//! Error messages should be descriptive and include the selector or URL involved.

pub use shorecheck_core::{Result, ShorecheckError};

// For backward compatibility, type alias to ShorecheckError
pub type BrowserError = ShorecheckError;
