//! Detail-view overlay state.

use crate::cards;
use crate::repos::RepoRecord;
use crate::surface::RenderSurface;

/// Holds the single detail overlay.
///
/// At most one view exists at a time; opening over an existing view replaces
/// it in place. Page scroll is suppressed while a view is open and restored
/// on close.
#[derive(Debug, Default)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    /// Creates a closed modal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a detail view is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the detail view for a record.
    pub fn open(&mut self, record: &RepoRecord, surface: &mut dyn RenderSurface) {
        let hue = cards::hue(&record.name);
        let view = cards::detail_view(record, hue);
        surface.set_modal(Some(view.to_html()));
        surface.set_scroll_locked(true);
        self.open = true;
    }

    /// Closes the detail view and restores scrolling. Harmless when already
    /// closed.
    pub fn close(&mut self, surface: &mut dyn RenderSurface) {
        surface.set_modal(None);
        surface.set_scroll_locked(false);
        self.open = false;
    }
}
