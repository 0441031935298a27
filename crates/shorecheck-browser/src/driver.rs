//! Page automation capability trait
//!
//! The verification runner depends on a remote, mutable DOM only through
//! this capability set: navigate, wait-for-selector, visibility query,
//! click, compound-predicate click, read rendered content, polled predicate
//! wait, screenshot. [`BrowserSession`] is the CDP-backed implementation;
//! tests substitute a scripted in-memory driver.

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::screenshot;
use async_trait::async_trait;
use std::path::Path;

/// Capability set for driving a single page
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to a URL and block until the document is loaded
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Block until an element matching the selector is attached
    async fn wait_for_selector(&self, selector: &str) -> Result<()>;

    /// Whether the element is rendered with a non-zero box and not hidden
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Issue a synthetic click on the element matching the selector
    async fn click(&self, selector: &str) -> Result<()>;

    /// Click the single element matching `selector` whose text contains
    /// `text`; zero or multiple matches is an error
    async fn click_only_match(&self, selector: &str, text: &str) -> Result<()>;

    /// Full rendered markup of the current document
    async fn page_content(&self) -> Result<String>;

    /// Poll a client-side boolean predicate until true or timeout
    async fn wait_until(&self, what: &str, predicate_js: &str) -> Result<()>;

    /// Write a full-page screenshot to `path`, returning bytes written
    async fn screenshot(&self, path: &Path) -> Result<u64>;
}

#[async_trait]
impl PageDriver for BrowserSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        BrowserSession::navigate(self, url).await
    }

    async fn wait_for_selector(&self, selector: &str) -> Result<()> {
        self.wait_for_element(selector, None).await
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        BrowserSession::is_visible(self, selector).await
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.click_element(selector).await
    }

    async fn click_only_match(&self, selector: &str, text: &str) -> Result<()> {
        BrowserSession::click_only_match(self, selector, text).await
    }

    async fn page_content(&self) -> Result<String> {
        BrowserSession::page_content(self).await
    }

    async fn wait_until(&self, what: &str, predicate_js: &str) -> Result<()> {
        BrowserSession::wait_until(self, what, predicate_js).await
    }

    async fn screenshot(&self, path: &Path) -> Result<u64> {
        screenshot::save_full_page(self, path).await
    }
}
