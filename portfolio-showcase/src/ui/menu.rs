//! Mobile navigation panel state.

use crate::surface::{Icon, RenderSurface};

/// Holds the hamburger menu panel.
#[derive(Debug, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Creates a closed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the panel and swaps the hamburger icon.
    pub fn toggle(&mut self, surface: &mut dyn RenderSurface) {
        self.open = !self.open;
        surface.set_menu_open(self.open);
        surface.set_menu_icon(if self.open { Icon::Close } else { Icon::Bars });
    }

    /// Closes the panel, e.g. after following a nav link.
    pub fn close(&mut self, surface: &mut dyn RenderSurface) {
        self.open = false;
        surface.set_menu_open(false);
        surface.set_menu_icon(Icon::Bars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;

    #[test]
    fn toggle_opens_then_closes() {
        let mut menu = MenuState::new();
        let mut surface = BufferSurface::new();

        menu.toggle(&mut surface);
        assert!(menu.is_open());
        assert!(surface.menu_open);
        assert_eq!(surface.menu_icon, Some(Icon::Close));

        menu.toggle(&mut surface);
        assert!(!menu.is_open());
        assert!(!surface.menu_open);
        assert_eq!(surface.menu_icon, Some(Icon::Bars));
    }

    #[test]
    fn close_resets_even_when_open() {
        let mut menu = MenuState::new();
        let mut surface = BufferSurface::new();

        menu.toggle(&mut surface);
        menu.close(&mut surface);

        assert!(!menu.is_open());
        assert_eq!(surface.menu_icon, Some(Icon::Bars));
    }
}
