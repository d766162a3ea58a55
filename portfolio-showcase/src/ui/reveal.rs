//! Scroll-reveal observation.
//!
//! Elements are registered once for the life of the page and never torn
//! down. An intersection re-applies the same visual marker, so repeated
//! sightings of the same element are harmless.

use crate::surface::RenderSurface;
use std::collections::HashSet;

/// Tracks which elements participate in scroll reveal.
#[derive(Debug, Default)]
pub struct RevealObserver {
    observed: HashSet<String>,
}

impl RevealObserver {
    /// Creates an observer with no registered elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element for reveal.
    pub fn observe(&mut self, element_id: impl Into<String>) {
        self.observed.insert(element_id.into());
    }

    /// Returns whether an element is registered.
    #[must_use]
    pub fn is_observed(&self, element_id: &str) -> bool {
        self.observed.contains(element_id)
    }

    /// Handles an intersection sighting: registered elements get the
    /// revealed marker, unknown ids are ignored.
    pub fn intersect(&self, element_id: &str, surface: &mut dyn RenderSurface) {
        if self.observed.contains(element_id) {
            surface.mark_revealed(element_id);
        }
    }
}
