//! Gallery population.
//!
//! A single order-preserving pass classifies each record, renders its card
//! into the matching region, and registers it for scroll reveal. A post-pass
//! fills any region that received nothing with its fixed empty-state
//! message. Fetch failures render a fixed inline notice into both regions
//! instead of leaving them in a loading state.

use crate::cards;
use crate::fragment::Element;
use crate::repos::{classify, DisplayGroup, RepoRecord};
use crate::surface::{Region, RenderSurface};
use crate::ui::RevealObserver;
use tracing::{debug, info};

/// Empty-state message for the web region.
pub const WEB_EMPTY_MESSAGE: &str = "No dedicated Web repositories found publicly.";

/// Empty-state message for the mobile region.
pub const MOBILE_EMPTY_MESSAGE: &str = "No dedicated Flutter repositories found publicly.";

/// Inline notice rendered into both regions when the listing call fails.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load projects.";

/// Records partitioned by display group, input order preserved within each.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub web: Vec<RepoRecord>,
    pub mobile: Vec<RepoRecord>,
}

impl Classified {
    /// Returns the records of one group.
    pub fn group(&self, group: DisplayGroup) -> &[RepoRecord] {
        match group {
            DisplayGroup::Web => &self.web,
            DisplayGroup::Mobile => &self.mobile,
        }
    }

    /// Returns true when neither group received a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.web.is_empty() && self.mobile.is_empty()
    }
}

/// Returns the element id of a card, used for scroll-reveal registration.
#[must_use]
pub fn card_element_id(region: Region, position: usize) -> String {
    format!("project-card-{}-{}", region.as_str(), position)
}

/// Renders all records into their regions.
///
/// Returns the partitioned records so callers can resolve a card press back
/// to its record when opening the detail view.
pub fn populate(
    records: &[RepoRecord],
    surface: &mut dyn RenderSurface,
    reveal: &mut RevealObserver,
) -> Classified {
    let mut classified = Classified::default();
    surface.replace_region(Region::Web, String::new());
    surface.replace_region(Region::Mobile, String::new());

    for (position, record) in records.iter().enumerate() {
        let card = cards::summary_card(record, position);
        let (region, bucket) = match classify(record) {
            DisplayGroup::Web => (Region::Web, &mut classified.web),
            DisplayGroup::Mobile => (Region::Mobile, &mut classified.mobile),
        };

        surface.append_to_region(region, card.to_html());
        reveal.observe(card_element_id(region, bucket.len()));
        bucket.push(record.clone());
        debug!(name = %record.name, group = region.as_str(), "Rendered project card");
    }

    if classified.mobile.is_empty() {
        surface.replace_region(Region::Mobile, empty_state(MOBILE_EMPTY_MESSAGE).to_html());
    }
    if classified.web.is_empty() {
        surface.replace_region(Region::Web, empty_state(WEB_EMPTY_MESSAGE).to_html());
    }

    info!(
        web = classified.web.len(),
        mobile = classified.mobile.len(),
        "Galleries populated"
    );
    classified
}

/// Renders the fixed fetch-error notice into both regions.
pub fn render_load_error(surface: &mut dyn RenderSurface) {
    let notice = error_notice().to_html();
    surface.replace_region(Region::Web, notice.clone());
    surface.replace_region(Region::Mobile, notice);
}

fn empty_state(message: &str) -> Element {
    Element::new("p").class("gallery-empty").text(message)
}

fn error_notice() -> Element {
    Element::new("div")
        .class("gallery-error")
        .child(Element::new("i").class("fas").class("fa-exclamation-triangle"))
        .text(format!(" {LOAD_ERROR_MESSAGE}"))
}
