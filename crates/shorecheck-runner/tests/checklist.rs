//! Integration tests for the verification checklist.
//!
//! These tests drive the runner with a scripted in-memory driver and verify
//! call ordering, the fatal/non-fatal split, and the recorded report.

use async_trait::async_trait;
use shorecheck_browser::PageDriver;
use shorecheck_core::{Result, RunnerConfig, ShorecheckError};
use shorecheck_runner::{Scenario, VerificationRunner};
use std::path::Path;
use std::sync::Mutex;

/// Scripted driver standing in for a live browser session
struct MockDriver {
    calls: Mutex<Vec<String>>,
    search_visible: bool,
    container_visible: bool,
    page_html: String,
    /// How many cards match the compound popular-card predicate
    card_matches: usize,
    fail_toggle_wait: bool,
    fail_membership_wait: bool,
}

impl MockDriver {
    fn happy() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            search_visible: true,
            container_visible: true,
            page_html:
                "<div class=\"beach-popup\"><h4>Best Time</h4><h4>Activities</h4>\
                 <button class=\"itinerary-btn\">Add to Itinerary</button></div>"
                    .to_string(),
            card_matches: 1,
            fail_toggle_wait: false,
            fail_membership_wait: false,
        }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageDriver for MockDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.record(format!("navigate {}", url));
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str) -> Result<()> {
        self.record(format!("wait {}", selector));
        Ok(())
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        self.record(format!("visible? {}", selector));
        Ok(match selector {
            "#search-input" => self.search_visible,
            "#itinerary-container" => self.container_visible,
            _ => true,
        })
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.record(format!("click {}", selector));
        Ok(())
    }

    async fn click_only_match(&self, selector: &str, text: &str) -> Result<()> {
        self.record(format!("click-match {} '{}'", selector, text));
        match self.card_matches {
            0 => Err(ShorecheckError::ElementNotFound(format!(
                "{} containing '{}'",
                selector, text
            ))),
            1 => Ok(()),
            count => Err(ShorecheckError::AmbiguousSelector {
                selector: selector.to_string(),
                count,
            }),
        }
    }

    async fn page_content(&self) -> Result<String> {
        self.record("content".to_string());
        Ok(self.page_html.clone())
    }

    async fn wait_until(&self, what: &str, _predicate_js: &str) -> Result<()> {
        self.record(format!("until {}", what));
        if self.fail_toggle_wait && what.contains("remove label") {
            return Err(ShorecheckError::WaitTimeout(what.to_string()));
        }
        if self.fail_membership_wait && what.contains("appear in the itinerary") {
            return Err(ShorecheckError::WaitTimeout(what.to_string()));
        }
        Ok(())
    }

    async fn screenshot(&self, path: &Path) -> Result<u64> {
        self.record(format!("screenshot {}", path.display()));
        Ok(1)
    }
}

fn runner<'a>(driver: &'a MockDriver, scenario: Scenario) -> VerificationRunner<'a, MockDriver> {
    VerificationRunner::new(driver, RunnerConfig::default(), scenario)
}

#[tokio::test]
async fn test_happy_path_runs_checklist_in_order() {
    let driver = MockDriver::happy();
    let report = runner(&driver, Scenario::default()).run().await.unwrap();

    assert_eq!(
        driver.calls(),
        vec![
            "navigate http://localhost:8000",
            "wait #loadingScreen.hidden",
            "wait #search-input",
            "visible? #search-input",
            "click-match .beach-card.popular 'Kovalam Beach'",
            "wait .leaflet-popup-content",
            "content",
            "screenshot verification_popup.png",
            "click .leaflet-popup-content .itinerary-btn",
            "until itinerary button to show the remove label",
            "wait #itinerary-container",
            "visible? #itinerary-container",
            "until beach to appear in the itinerary list",
            "screenshot verification_itinerary.png",
        ]
    );

    assert!(report.all_passed());
    assert_eq!(report.checks.len(), 7);
    assert_eq!(report.screenshots.len(), 2);
    assert!(report.finished_at.is_some());
}

#[tokio::test]
async fn test_search_bar_check_runs_before_any_interaction() {
    let driver = MockDriver::happy();
    runner(&driver, Scenario::default()).run().await.unwrap();

    let calls = driver.calls();
    let search_check = calls
        .iter()
        .position(|c| c == "visible? #search-input")
        .unwrap();
    let first_click = calls.iter().position(|c| c.starts_with("click")).unwrap();
    assert!(search_check < first_click);
}

#[tokio::test]
async fn test_invisible_search_bar_is_reported_not_fatal() {
    let driver = MockDriver {
        search_visible: false,
        ..MockDriver::happy()
    };
    let report = runner(&driver, Scenario::default()).run().await.unwrap();

    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].name, "search-bar-visible");
    // The run continued all the way to the second screenshot
    assert_eq!(report.screenshots.len(), 2);
}

#[tokio::test]
async fn test_missing_popup_sections_are_reported_independently() {
    let driver = MockDriver {
        page_html: "<button class=\"itinerary-btn\">Add to Itinerary</button>".to_string(),
        ..MockDriver::happy()
    };
    let report = runner(&driver, Scenario::default()).run().await.unwrap();

    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].name, "popup-sections");
    assert!(report
        .checks
        .iter()
        .any(|c| c.name == "popup-itinerary-button" && c.passed()));
}

#[tokio::test]
async fn test_missing_card_is_fatal_and_stops_the_run() {
    let driver = MockDriver {
        card_matches: 0,
        ..MockDriver::happy()
    };
    let result = runner(&driver, Scenario::default()).run().await;

    assert!(matches!(result, Err(ShorecheckError::ElementNotFound(_))));
    // Nothing after the failed lookup ran
    let calls = driver.calls();
    assert_eq!(
        calls.last().unwrap(),
        "click-match .beach-card.popular 'Kovalam Beach'"
    );
    assert!(!calls.iter().any(|c| c.starts_with("screenshot")));
}

#[tokio::test]
async fn test_multiple_matching_cards_are_a_setup_defect() {
    let driver = MockDriver {
        card_matches: 3,
        ..MockDriver::happy()
    };
    let result = runner(&driver, Scenario::default()).run().await;

    match result {
        Err(ShorecheckError::AmbiguousSelector { count, .. }) => assert_eq!(count, 3),
        other => panic!("expected ambiguous selector, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_toggle_timeout_is_fatal() {
    let driver = MockDriver {
        fail_toggle_wait: true,
        ..MockDriver::happy()
    };
    let result = runner(&driver, Scenario::default()).run().await;

    assert!(matches!(result, Err(ShorecheckError::WaitTimeout(_))));
    // The first screenshot was taken, the second never was
    let screenshots: Vec<_> = driver
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("screenshot"))
        .collect();
    assert_eq!(screenshots, vec!["screenshot verification_popup.png"]);
}

#[tokio::test]
async fn test_membership_timeout_is_reported_not_fatal() {
    let driver = MockDriver {
        fail_membership_wait: true,
        ..MockDriver::happy()
    };
    let report = runner(&driver, Scenario::default()).run().await.unwrap();

    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].name, "itinerary-membership");
    // The second screenshot was still taken
    assert_eq!(report.screenshots.len(), 2);
}

#[tokio::test]
async fn test_roundtrip_extends_the_checklist() {
    let driver = MockDriver::happy();
    let report = runner(&driver, Scenario::default().with_roundtrip(true))
        .run()
        .await
        .unwrap();

    let calls = driver.calls();
    let second_click = calls
        .iter()
        .filter(|c| *c == "click .leaflet-popup-content .itinerary-btn")
        .count();
    assert_eq!(second_click, 2);
    assert!(calls
        .iter()
        .any(|c| c == "until itinerary button to show the add label"));
    assert!(calls
        .iter()
        .any(|c| c == "until beach to leave the itinerary list"));

    assert_eq!(report.checks.len(), 9);
    assert!(report
        .checks
        .iter()
        .any(|c| c.name == "roundtrip-reverted" && c.passed()));
    assert!(report
        .checks
        .iter()
        .any(|c| c.name == "roundtrip-removed" && c.passed()));
}

#[tokio::test]
async fn test_custom_beach_flows_through_the_run() {
    let driver = MockDriver::happy();
    let report = runner(&driver, Scenario::for_beach("Varkala Beach"))
        .run()
        .await
        .unwrap();

    assert!(driver
        .calls()
        .iter()
        .any(|c| c == "click-match .beach-card.popular 'Varkala Beach'"));
    assert!(report
        .checks
        .iter()
        .any(|c| c.name == "itinerary-membership" && c.passed()));
}
