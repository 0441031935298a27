//! The sequential verification checklist
//!
//! One ordered pass over the running app: readiness, search bar, card
//! click, popup content, itinerary toggle, sidebar membership, two
//! screenshot artifacts. Blocking waits that cannot be satisfied within the
//! configured timeout abort the run; presence/visibility checks are
//! reported and execution continues.

use shorecheck_browser::PageDriver;
use shorecheck_core::{Result, RunReport, RunnerConfig, ShorecheckError};
use tracing::info;

use crate::scenario::{labels, selectors, Scenario};

/// Executes the verification checklist against a [`PageDriver`]
///
/// The runner borrows an already-acquired driver; session lifecycle (and
/// with it the guaranteed browser release on every exit path) stays with
/// the caller.
pub struct VerificationRunner<'a, D: PageDriver> {
    driver: &'a D,
    config: RunnerConfig,
    scenario: Scenario,
}

impl<'a, D: PageDriver> VerificationRunner<'a, D> {
    pub fn new(driver: &'a D, config: RunnerConfig, scenario: Scenario) -> Self {
        Self {
            driver,
            config,
            scenario,
        }
    }

    /// Run the full checklist, returning the structured report
    ///
    /// Returns `Err` on a fatal condition (navigation, readiness, lookup or
    /// state-change wait failure); the remaining checklist is abandoned.
    /// Non-fatal check failures are printed and recorded, and the run
    /// continues.
    pub async fn run(&self) -> Result<RunReport> {
        let mut report = RunReport::new(&self.config.base_url);
        info!("Starting verification run against {}", self.config.base_url);

        // Navigate to the app
        self.driver.navigate(&self.config.base_url).await?;

        // Wait for the loading screen to disappear
        self.driver
            .wait_for_selector(selectors::LOADING_HIDDEN)
            .await?;

        // 1. Verify search bar
        self.driver
            .wait_for_selector(selectors::SEARCH_INPUT)
            .await?;
        let search_visible = self.driver.is_visible(selectors::SEARCH_INPUT).await?;
        self.check(
            &mut report,
            "search-bar-visible",
            search_visible,
            "Search bar is visible.",
            "Error: Search bar not visible.",
        );

        // 2. Click the beach card in the sidebar list
        self.driver
            .click_only_match(selectors::POPULAR_BEACH_CARD, &self.scenario.beach)
            .await?;

        // Wait for popup
        self.driver
            .wait_for_selector(selectors::POPUP_CONTENT)
            .await?;
        println!("Popup opened.");
        report.record_pass("popup-opened");

        // 3. Verify popup content
        let content = self.driver.page_content().await?;
        let has_sections = content.contains(labels::SECTION_BEST_TIME)
            && content.contains(labels::SECTION_ACTIVITIES);
        self.check(
            &mut report,
            "popup-sections",
            has_sections,
            "Popup contains new sections (Best Time, Activities).",
            "Error: Popup missing new sections.",
        );

        let has_button = content.contains(labels::ADD_TO_ITINERARY);
        self.check(
            &mut report,
            "popup-itinerary-button",
            has_button,
            "Popup contains 'Add to Itinerary' button.",
            "Error: Popup missing itinerary button.",
        );

        // Screenshot of the popup
        let popup_path = self.config.screenshots.popup.clone();
        self.driver.screenshot(&popup_path).await?;
        report.record_screenshot(&popup_path);
        println!("Screenshot of popup saved to {}", popup_path.display());

        // 4. Click "Add to Itinerary" inside the popup
        self.driver.click(selectors::POPUP_ITINERARY_BTN).await?;

        // Wait for the button text to change
        self.driver
            .wait_until(
                "itinerary button to show the remove label",
                &self.scenario.toggled_predicate(),
            )
            .await?;
        println!("Itinerary button toggled.");
        report.record_pass("itinerary-toggled");

        // 5. Verify the itinerary list in the sidebar
        self.driver
            .wait_for_selector(selectors::ITINERARY_CONTAINER)
            .await?;
        let container_visible = self
            .driver
            .is_visible(selectors::ITINERARY_CONTAINER)
            .await?;
        self.check(
            &mut report,
            "itinerary-container-visible",
            container_visible,
            "Itinerary container is visible.",
            "Error: Itinerary container not visible.",
        );

        let membership = self
            .nonfatal_wait(
                "beach to appear in the itinerary list",
                &self.scenario.membership_predicate(),
            )
            .await?;
        self.check(
            &mut report,
            "itinerary-membership",
            membership,
            &format!("{} added to itinerary list.", self.scenario.beach),
            &format!(
                "Error: {} not found in itinerary list.",
                self.scenario.beach
            ),
        );

        // Screenshot of the sidebar with the itinerary
        let itinerary_path = self.config.screenshots.itinerary.clone();
        self.driver.screenshot(&itinerary_path).await?;
        report.record_screenshot(&itinerary_path);
        println!("Screenshot of sidebar saved to {}", itinerary_path.display());

        // 6. Optional reverse toggle: remove the beach again
        if self.scenario.roundtrip {
            self.run_roundtrip(&mut report).await?;
        }

        report.finish();
        info!(
            "Verification run finished: {}/{} checks passed",
            report.passed_count(),
            report.checks.len()
        );
        Ok(report)
    }

    /// Reverse-toggle leg: click the button again, expect the add label back
    /// and the beach gone from the list
    async fn run_roundtrip(&self, report: &mut RunReport) -> Result<()> {
        self.driver.click(selectors::POPUP_ITINERARY_BTN).await?;

        let reverted = self
            .nonfatal_wait(
                "itinerary button to show the add label",
                &self.scenario.reverted_predicate(),
            )
            .await?;
        self.check(
            report,
            "roundtrip-reverted",
            reverted,
            "Itinerary button reverted.",
            "Error: Itinerary button did not revert.",
        );

        let removed = self
            .nonfatal_wait(
                "beach to leave the itinerary list",
                &self.scenario.removal_predicate(),
            )
            .await?;
        self.check(
            report,
            "roundtrip-removed",
            removed,
            &format!("{} removed from itinerary list.", self.scenario.beach),
            &format!(
                "Error: {} still present in itinerary list.",
                self.scenario.beach
            ),
        );

        Ok(())
    }

    /// Bounded wait whose timeout is a reported failure, not a fatal stop
    async fn nonfatal_wait(&self, what: &str, predicate: &str) -> Result<bool> {
        match self.driver.wait_until(what, predicate).await {
            Ok(()) => Ok(true),
            Err(ShorecheckError::WaitTimeout(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Print a check outcome and record it in the report
    fn check(&self, report: &mut RunReport, name: &str, passed: bool, ok_line: &str, err_line: &str) {
        if passed {
            println!("{}", ok_line);
            report.record_pass(name);
        } else {
            println!("{}", err_line);
            report.record_fail(name, err_line);
        }
    }
}
