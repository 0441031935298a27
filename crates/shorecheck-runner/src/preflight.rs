//! Preflight reachability probe for the target application
//!
//! The runner assumes the app is already being served; starting it is out of
//! scope. Probing the base URL before launching a browser turns "environment
//! not ready" into its own error instead of an arbitrary wait timeout deep
//! in the checklist.

use shorecheck_core::{Result, ShorecheckError};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, warn};

const PROBE_INTERVAL: Duration = Duration::from_millis(500);
const PROBE_REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Poll the base URL until it answers with a success status or the timeout elapses
pub async fn wait_for_app(base_url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ShorecheckError::Preflight(format!("Failed to build HTTP client: {}", e)))?;

    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match client.get(base_url).send().await {
            Ok(response) if response.status().is_success() => {
                info!(
                    "Target application answered at {} (attempt {})",
                    base_url, attempts
                );
                return Ok(());
            }
            Ok(response) => {
                warn!(
                    "Target application answered with status {} (attempt {})",
                    response.status(),
                    attempts
                );
            }
            Err(e) => {
                debug!("Probe attempt {} failed: {}", attempts, e);
            }
        }

        if start.elapsed() >= timeout {
            return Err(ShorecheckError::Preflight(format!(
                "{} did not answer within {:?} ({} attempts)",
                base_url, timeout, attempts
            )));
        }

        sleep(PROBE_INTERVAL).await;
    }
}
