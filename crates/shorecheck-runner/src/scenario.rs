//! Selectors, labels and scenario parameters for the beach-discovery app
//!
//! The target application is expected to expose these identifiers and
//! classes in its rendered markup. They are the contract between the runner
//! and the app; if the app's markup changes, this is the file to update.

/// CSS selectors the app is expected to expose
pub mod selectors {
    /// Loading screen once it has transitioned to its hidden state
    pub const LOADING_HIDDEN: &str = "#loadingScreen.hidden";
    /// Search input in the sidebar
    pub const SEARCH_INPUT: &str = "#search-input";
    /// Beach cards carrying the popular marker
    pub const POPULAR_BEACH_CARD: &str = ".beach-card.popular";
    /// Leaflet popup content container, present once a popup is open
    pub const POPUP_CONTENT: &str = ".leaflet-popup-content";
    /// Itinerary toggle button, wherever it is rendered
    pub const ITINERARY_BTN: &str = ".itinerary-btn";
    /// Itinerary toggle button scoped to the open popup
    pub const POPUP_ITINERARY_BTN: &str = ".leaflet-popup-content .itinerary-btn";
    /// Sidebar itinerary container
    pub const ITINERARY_CONTAINER: &str = "#itinerary-container";
    /// Beach cards inside the itinerary list
    pub const ITINERARY_CARD: &str = "#itinerary-list .beach-card";
}

/// Rendered text the app is expected to contain
pub mod labels {
    /// Popup section header for the best visiting season
    pub const SECTION_BEST_TIME: &str = "Best Time";
    /// Popup section header for available activities
    pub const SECTION_ACTIVITIES: &str = "Activities";
    /// Itinerary button label before the beach is added
    pub const ADD_TO_ITINERARY: &str = "Add to Itinerary";
    /// Substring of the itinerary button label once the beach is added
    pub const REMOVE_MARKER: &str = "Remove";
}

/// Parameters of one verification scenario
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Beach the run selects and tracks through the itinerary
    pub beach: String,
    /// Also exercise the reverse toggle (remove the beach again)
    pub roundtrip: bool,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            beach: "Kovalam Beach".to_string(),
            roundtrip: false,
        }
    }
}

impl Scenario {
    /// Scenario for a named beach
    pub fn for_beach(beach: &str) -> Self {
        Self {
            beach: beach.to_string(),
            ..Self::default()
        }
    }

    /// Enable the reverse-toggle leg of the checklist
    pub fn with_roundtrip(mut self, roundtrip: bool) -> Self {
        self.roundtrip = roundtrip;
        self
    }

    /// Predicate: the itinerary button text contains the remove marker
    pub fn toggled_predicate(&self) -> String {
        button_text_predicate(labels::REMOVE_MARKER)
    }

    /// Predicate: the itinerary button text reverted to the add label
    pub fn reverted_predicate(&self) -> String {
        button_text_predicate(labels::ADD_TO_ITINERARY)
    }

    /// Predicate: a visible itinerary card contains the beach name
    pub fn membership_predicate(&self) -> String {
        format!(
            "(() => Array.from(document.querySelectorAll('{}'))\
             .some(el => el.textContent.includes('{}') && el.offsetWidth > 0 && el.offsetHeight > 0))()",
            selectors::ITINERARY_CARD,
            self.beach
        )
    }

    /// Predicate: no itinerary card contains the beach name any more
    pub fn removal_predicate(&self) -> String {
        format!(
            "(() => Array.from(document.querySelectorAll('{}'))\
             .every(el => !el.textContent.includes('{}')))()",
            selectors::ITINERARY_CARD,
            self.beach
        )
    }
}

fn button_text_predicate(marker: &str) -> String {
    format!(
        "(() => {{ const el = document.querySelector('{}'); \
         return !!el && el.textContent.includes('{}'); }})()",
        selectors::ITINERARY_BTN,
        marker
    )
}
