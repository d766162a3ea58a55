//! Abstract render surface.
//!
//! Every visible effect the page performs goes through [`RenderSurface`], so
//! theme, gallery, modal, and form logic can run against a recording
//! implementation in tests instead of a live document. [`BufferSurface`] is
//! that implementation; the page builder also uses it to accumulate gallery
//! markup before rendering the shell.

use crate::theme::Theme;
use std::collections::{HashMap, HashSet};

/// One of the two gallery containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The web projects grid.
    Web,
    /// The Flutter/mobile projects grid.
    Mobile,
}

impl Region {
    /// Returns the region as a short identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
        }
    }

    /// Returns the id of the container element for this region.
    #[must_use]
    pub fn container_id(&self) -> &'static str {
        match self {
            Self::Web => "projects-web",
            Self::Mobile => "projects-mobile",
        }
    }
}

/// Icon affordances swapped by the theme and menu toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
    Bars,
    Close,
}

impl Icon {
    /// Returns the Font Awesome class for this icon.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Sun => "fa-sun",
            Self::Moon => "fa-moon",
            Self::Bars => "fa-bars",
            Self::Close => "fa-times",
        }
    }
}

/// User-facing notices raised by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MessageSent,
    MessageFailed,
}

impl Notice {
    /// Returns the notice text shown to the user.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MessageSent => "Message sent!",
            Self::MessageFailed => "Failed to send message. Please try again later.",
        }
    }
}

/// The set of visible effects the page performs.
pub trait RenderSurface {
    /// Sets the document-level theme marker.
    fn set_document_theme(&mut self, theme: Theme);

    /// Swaps the theme-toggle icon.
    fn set_theme_icon(&mut self, icon: Icon);

    /// Swaps the hamburger icon.
    fn set_menu_icon(&mut self, icon: Icon);

    /// Opens or closes the mobile menu panel.
    fn set_menu_open(&mut self, open: bool);

    /// Replaces a gallery region's content.
    fn replace_region(&mut self, region: Region, html: String);

    /// Appends a card to a gallery region.
    fn append_to_region(&mut self, region: Region, html: String);

    /// Opens the detail overlay with the given body, or closes it.
    fn set_modal(&mut self, body: Option<String>);

    /// Suppresses or restores page scroll.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Applies the revealed marker to an observed element.
    fn mark_revealed(&mut self, element_id: &str);

    /// Shows a user-facing notice.
    fn show_notice(&mut self, notice: Notice);

    /// Clears the contact form fields.
    fn clear_contact_form(&mut self);
}

/// A surface that records every effect in memory.
#[derive(Debug, Default)]
pub struct BufferSurface {
    /// Applied document theme, if any.
    pub theme: Option<Theme>,
    /// Current theme-toggle icon.
    pub theme_icon: Option<Icon>,
    /// Current hamburger icon.
    pub menu_icon: Option<Icon>,
    /// Whether the mobile menu panel is open.
    pub menu_open: bool,
    /// Current detail overlay body, if open.
    pub modal: Option<String>,
    /// Whether page scroll is suppressed.
    pub scroll_locked: bool,
    /// Elements carrying the revealed marker.
    pub revealed: HashSet<String>,
    /// Notices shown, in order.
    pub notices: Vec<Notice>,
    /// Whether the contact form was cleared.
    pub contact_cleared: bool,
    regions: HashMap<Region, String>,
}

impl BufferSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated markup of a region.
    pub fn region(&self, region: Region) -> &str {
        self.regions.get(&region).map_or("", String::as_str)
    }
}

impl RenderSurface for BufferSurface {
    fn set_document_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn set_theme_icon(&mut self, icon: Icon) {
        self.theme_icon = Some(icon);
    }

    fn set_menu_icon(&mut self, icon: Icon) {
        self.menu_icon = Some(icon);
    }

    fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    fn replace_region(&mut self, region: Region, html: String) {
        self.regions.insert(region, html);
    }

    fn append_to_region(&mut self, region: Region, html: String) {
        self.regions.entry(region).or_default().push_str(&html);
    }

    fn set_modal(&mut self, body: Option<String>) {
        self.modal = body;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn mark_revealed(&mut self, element_id: &str) {
        self.revealed.insert(element_id.to_string());
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn clear_contact_form(&mut self) {
        self.contact_cleared = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_accumulate_appends() {
        let mut surface = BufferSurface::new();
        surface.append_to_region(Region::Web, "<div>a</div>".to_string());
        surface.append_to_region(Region::Web, "<div>b</div>".to_string());

        assert_eq!(surface.region(Region::Web), "<div>a</div><div>b</div>");
        assert_eq!(surface.region(Region::Mobile), "");
    }

    #[test]
    fn replace_discards_previous_content() {
        let mut surface = BufferSurface::new();
        surface.append_to_region(Region::Mobile, "<div>card</div>".to_string());
        surface.replace_region(Region::Mobile, "<p>empty</p>".to_string());

        assert_eq!(surface.region(Region::Mobile), "<p>empty</p>");
    }

    #[test]
    fn icons_map_to_their_css_classes() {
        assert_eq!(Icon::Sun.css_class(), "fa-sun");
        assert_eq!(Icon::Moon.css_class(), "fa-moon");
        assert_eq!(Icon::Bars.css_class(), "fa-bars");
        assert_eq!(Icon::Close.css_class(), "fa-times");
    }

    #[test]
    fn notice_messages_are_fixed() {
        assert_eq!(Notice::MessageSent.message(), "Message sent!");
        assert_eq!(
            Notice::MessageFailed.message(),
            "Failed to send message. Please try again later."
        );
    }
}
