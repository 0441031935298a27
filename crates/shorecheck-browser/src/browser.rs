//! Browser lifecycle management using Chrome DevTools Protocol

use crate::error::Result;
use headless_chrome::{Browser, LaunchOptions, Tab};
use shorecheck_core::ShorecheckError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Upper bound for waits and navigation, in seconds
    pub timeout_seconds: u64,
    /// Poll interval for client-side predicate waits, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            timeout_seconds: 30,
            poll_interval_ms: 100,
        }
    }
}

impl BrowserConfig {
    /// Wait timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Active browser session with Chrome DevTools Protocol
///
/// Exactly one session and one tab exist per verification run. Dropping the
/// session releases the browser process, on the failure path as well.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a new headless browser with default configuration
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| ShorecheckError::Browser(format!("Failed to launch browser: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| ShorecheckError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ShorecheckError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Connect to an existing browser instance
    ///
    /// # Arguments
    /// * `port` - Chrome DevTools Protocol port (typically 9222)
    pub async fn connect(port: u16, config: BrowserConfig) -> Result<Self> {
        info!("Connecting to existing browser on port {}", port);

        let browser = Browser::connect(format!("http://127.0.0.1:{}", port))
            .map_err(|e| ShorecheckError::Browser(format!("Failed to connect to browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ShorecheckError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Connected to browser successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to a URL and block until navigation completes
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| ShorecheckError::Navigation(format!("{}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| ShorecheckError::Navigation(format!("timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Wait for an element to appear
    ///
    /// # Arguments
    /// * `selector` - CSS selector for the element
    /// * `timeout` - Optional timeout duration (uses config default if None)
    pub async fn wait_for_element(&self, selector: &str, timeout: Option<Duration>) -> Result<()> {
        let timeout_duration = timeout.unwrap_or_else(|| self.config.timeout());

        debug!(
            "Waiting for element: {} (timeout: {:?})",
            selector, timeout_duration
        );

        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout_duration)
            .map_err(|_e| ShorecheckError::ElementNotFound(selector.to_string()))?;

        debug!("Element found: {}", selector);
        Ok(())
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| ShorecheckError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Get the full rendered markup of the current page
    pub async fn page_content(&self) -> Result<String> {
        self.tab
            .get_content()
            .map_err(|e| ShorecheckError::Browser(format!("Failed to read page content: {}", e)))
    }

    /// Check whether an element is rendered and visible
    ///
    /// Visible means present in the DOM with a non-zero box and not hidden
    /// by `display: none` or `visibility: hidden`.
    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        let script = format!(
            r#"
            (() => {{
                const el = document.querySelector('{}');
                if (!el) {{ return false; }}
                const style = window.getComputedStyle(el);
                return el.offsetWidth > 0
                    && el.offsetHeight > 0
                    && style.visibility !== 'hidden'
                    && style.display !== 'none';
            }})()
            "#,
            selector
        );

        let result = self.evaluate_script(&script).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    /// Wait for an element and issue a synthetic click on it
    pub async fn click_element(&self, selector: &str) -> Result<()> {
        debug!("Clicking element: {}", selector);

        let element = self
            .tab
            .wait_for_element_with_custom_timeout(selector, self.config.timeout())
            .map_err(|_e| ShorecheckError::ElementNotFound(selector.to_string()))?;

        element
            .click()
            .map_err(|e| ShorecheckError::Browser(format!("Click failed on {}: {}", selector, e)))?;

        Ok(())
    }

    /// Click the single element matching `selector` whose text contains `text`
    ///
    /// Exactly one element must match the compound predicate: zero matches
    /// is an [`ShorecheckError::ElementNotFound`], several matches is an
    /// [`ShorecheckError::AmbiguousSelector`].
    pub async fn click_only_match(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Clicking element {} containing '{}'", selector, text);

        let elements = self
            .tab
            .find_elements(selector)
            .map_err(|_e| ShorecheckError::ElementNotFound(selector.to_string()))?;

        let matched: Vec<_> = elements
            .into_iter()
            .filter(|el| {
                el.get_inner_text()
                    .map(|t| t.contains(text))
                    .unwrap_or(false)
            })
            .collect();

        let described = format!("{} containing '{}'", selector, text);
        match matched.len() {
            0 => Err(ShorecheckError::ElementNotFound(described)),
            1 => {
                matched[0].click().map_err(|e| {
                    ShorecheckError::Browser(format!("Click failed on {}: {}", described, e))
                })?;
                debug!("Clicked {}", described);
                Ok(())
            }
            count => Err(ShorecheckError::AmbiguousSelector {
                selector: described,
                count,
            }),
        }
    }

    /// Poll a client-side predicate until it evaluates to `true`
    ///
    /// The predicate is a JavaScript expression re-evaluated in the page
    /// context every poll interval. Evaluation errors (the element not being
    /// attached yet) count as "not yet true". Times out after the configured
    /// wait timeout.
    ///
    /// # Arguments
    /// * `what` - Human description of the awaited condition, used in errors
    /// * `predicate` - JavaScript expression returning a boolean
    pub async fn wait_until(&self, what: &str, predicate: &str) -> Result<()> {
        debug!("Waiting until {} (predicate: {})", what, predicate);

        let deadline = Instant::now() + self.config.timeout();
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);

        loop {
            match self.evaluate_script(predicate).await {
                Ok(value) if value.as_bool() == Some(true) => {
                    debug!("Condition satisfied: {}", what);
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => debug!("Predicate not evaluable yet ({}): {}", what, e),
            }

            if Instant::now() >= deadline {
                return Err(ShorecheckError::WaitTimeout(what.to_string()));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser will be dropped and cleaned up automatically
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}
