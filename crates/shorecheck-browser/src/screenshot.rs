//! Screenshot capture using Chrome DevTools Protocol

use crate::browser::BrowserSession;
use crate::error::{BrowserError, Result};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use std::path::Path;
use tracing::{debug, info};

/// Capture a full-page PNG screenshot
pub async fn capture_full_page(session: &BrowserSession) -> Result<Vec<u8>> {
    debug!("Capturing full page screenshot");

    let tab = session.tab();
    let screenshot_data = tab
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
        .map_err(|e| BrowserError::Screenshot(format!("CDP capture failed: {}", e)))?;

    Ok(screenshot_data)
}

/// Capture a full-page screenshot and write it to `path`
///
/// The file is overwritten on each run. An empty capture is treated as a
/// failure rather than written out.
///
/// # Returns
/// Number of bytes written
pub async fn save_full_page(session: &BrowserSession, path: &Path) -> Result<u64> {
    let screenshot_data = capture_full_page(session).await?;

    if screenshot_data.is_empty() {
        return Err(BrowserError::Screenshot(format!(
            "Empty capture, refusing to write {}",
            path.display()
        )));
    }

    tokio::fs::write(path, &screenshot_data)
        .await
        .map_err(|e| {
            BrowserError::Screenshot(format!("Failed to write {}: {}", path.display(), e))
        })?;

    info!(
        "Screenshot saved: {} ({} bytes)",
        path.display(),
        screenshot_data.len()
    );

    Ok(screenshot_data.len() as u64)
}
