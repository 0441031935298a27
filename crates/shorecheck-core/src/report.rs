//! Structured run report
//!
//! Every printed check line has a structured counterpart here, so a run can
//! be consumed by machines as well as read from stdout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    Passed,
    Failed,
}

/// One verification check with its outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Short identifier for the check, e.g. `search-bar-visible`
    pub name: String,
    pub outcome: CheckOutcome,
    /// Extra context for failures (what was expected, what was seen)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcome == CheckOutcome::Passed
    }
}

/// Report covering one full verification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Base URL the run was executed against
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    /// Checks in execution order
    pub checks: Vec<CheckReport>,
    /// Screenshot artifacts written during the run
    pub screenshots: Vec<PathBuf>,
}

impl RunReport {
    /// Start a new report for a run against `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            started_at: Utc::now(),
            finished_at: None,
            checks: Vec::new(),
            screenshots: Vec::new(),
        }
    }

    /// Record a passed check
    pub fn record_pass(&mut self, name: &str) {
        self.checks.push(CheckReport {
            name: name.to_string(),
            outcome: CheckOutcome::Passed,
            detail: None,
        });
    }

    /// Record a failed check with context
    pub fn record_fail(&mut self, name: &str, detail: &str) {
        self.checks.push(CheckReport {
            name: name.to_string(),
            outcome: CheckOutcome::Failed,
            detail: Some(detail.to_string()),
        });
    }

    /// Record a written screenshot artifact
    pub fn record_screenshot(&mut self, path: &Path) {
        self.screenshots.push(path.to_path_buf());
    }

    /// Mark the run as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    /// Failed checks, in execution order
    pub fn failures(&self) -> Vec<&CheckReport> {
        self.checks.iter().filter(|c| !c.passed()).collect()
    }

    /// Whether every recorded check passed
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed())
    }
}
