//! Page event dispatch.
//!
//! Handlers are registered against an abstract event stream rather than a
//! live document: every interaction arrives as an [`Event`], and [`App`]
//! routes it to the owning state holder. Tests drive the same handlers with
//! synthetic events.

mod menu;
mod modal;
mod reveal;

pub use menu::MenuState;
pub use modal::ModalState;
pub use reveal::RevealObserver;

use crate::gallery::{self, Classified};
use crate::relay::{ContactMessage, RelayClient, RelayError};
use crate::repos::{self, DisplayGroup, RepoRecord};
use crate::surface::{Notice, RenderSurface};
use crate::theme::{PreferenceStore, Theme, ThemeController};
use octocrab::Octocrab;
use tracing::{error, info, warn};

/// A discrete user or page event.
#[derive(Debug, Clone)]
pub enum Event {
    /// The theme toggle was pressed.
    ThemeTogglePressed,
    /// The hamburger control was pressed.
    MenuTogglePressed,
    /// A navigation link was followed; the menu panel closes.
    NavLinkFollowed,
    /// A summary card was pressed.
    CardPressed {
        group: DisplayGroup,
        position: usize,
    },
    /// The overlay's close control was pressed.
    ModalClosePressed,
    /// The dimmed backdrop outside the detail view was pressed.
    BackdropPressed,
    /// An observed element scrolled into view.
    ElementEnteredViewport { element_id: String },
    /// The contact form was submitted.
    ContactSubmitted(ContactMessage),
}

/// The page's injectable state holder.
///
/// Owns the applied theme, menu and modal state, the reveal registry, the
/// classified records, and the optional contact relay, all acting on one
/// render surface.
pub struct App<S: RenderSurface> {
    surface: S,
    theme: ThemeController,
    menu: MenuState,
    modal: ModalState,
    reveal: RevealObserver,
    classified: Classified,
    relay: Option<RelayClient>,
}

impl<S: RenderSurface> App<S> {
    /// Creates the app and applies the persisted theme, as on page load.
    pub fn new(surface: S, store: Box<dyn PreferenceStore>, relay: Option<RelayClient>) -> Self {
        let mut app = Self {
            surface,
            theme: ThemeController::new(store),
            menu: MenuState::new(),
            modal: ModalState::new(),
            reveal: RevealObserver::new(),
            classified: Classified::default(),
            relay,
        };
        app.theme.init(&mut app.surface);
        app
    }

    /// Returns the render surface for inspection.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the currently applied theme.
    pub fn applied_theme(&self) -> Theme {
        self.theme.applied()
    }

    /// Returns whether a detail view is open.
    pub fn modal_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Registers a static page element for scroll reveal.
    pub fn observe(&mut self, element_id: impl Into<String>) {
        self.reveal.observe(element_id);
    }

    /// Fetches the galleries once, rendering cards on success and the fixed
    /// inline notice into both regions on failure. Theme and menu handling
    /// stay responsive either way.
    pub async fn load_projects(&mut self, octocrab: &Octocrab, handle: &str) {
        match repos::fetch_repositories(octocrab, handle).await {
            Ok(records) => self.load_records(&records),
            Err(e) => {
                error!(error = %e, "Unable to load projects");
                gallery::render_load_error(&mut self.surface);
            }
        }
    }

    /// Renders galleries from records already in hand.
    pub fn load_records(&mut self, records: &[RepoRecord]) {
        self.classified = gallery::populate(records, &mut self.surface, &mut self.reveal);
    }

    /// Routes one event to its handler.
    pub async fn handle_event(&mut self, event: Event) {
        match event {
            Event::ThemeTogglePressed => {
                self.theme.toggle(&mut self.surface);
            }
            Event::MenuTogglePressed => self.menu.toggle(&mut self.surface),
            Event::NavLinkFollowed => self.menu.close(&mut self.surface),
            Event::CardPressed { group, position } => self.open_detail(group, position),
            Event::ModalClosePressed | Event::BackdropPressed => {
                self.modal.close(&mut self.surface);
            }
            Event::ElementEnteredViewport { element_id } => {
                self.reveal.intersect(&element_id, &mut self.surface);
            }
            Event::ContactSubmitted(message) => self.submit_contact(message).await,
        }
    }

    fn open_detail(&mut self, group: DisplayGroup, position: usize) {
        let Some(record) = self.classified.group(group).get(position).cloned() else {
            warn!(group = group.as_str(), position, "Card press for unknown record");
            return;
        };
        self.modal.open(&record, &mut self.surface);
    }

    async fn submit_contact(&mut self, message: ContactMessage) {
        let outcome = match &self.relay {
            Some(relay) => relay.send(&message).await,
            None => Err(RelayError::NotConfigured),
        };
        self.apply_relay_outcome(outcome);
    }

    /// Applies a relay outcome to the surface: a confirmation notice and a
    /// cleared form on success, a failure notice otherwise. The form keeps
    /// its contents on failure so nothing reads as a false success.
    pub fn apply_relay_outcome(&mut self, outcome: Result<(), RelayError>) {
        match outcome {
            Ok(()) => {
                info!("Contact message relayed");
                self.surface.show_notice(Notice::MessageSent);
                self.surface.clear_contact_form();
            }
            Err(e) => {
                error!(error = %e, "Failed to relay contact message");
                self.surface.show_notice(Notice::MessageFailed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{BufferSurface, Icon, Region};
    use crate::theme::MemoryPreferences;

    fn record(name: &str, language: Option<&str>) -> RepoRecord {
        RepoRecord {
            name: name.to_string(),
            description: None,
            language: language.map(String::from),
            topics: Vec::new(),
            stargazers_count: 0,
            forks_count: 0,
            homepage: None,
            html_url: format!("https://github.com/example/{name}"),
            created_at: None,
            updated_at: None,
        }
    }

    fn app() -> App<BufferSurface> {
        App::new(BufferSurface::new(), Box::new(MemoryPreferences::new()), None)
    }

    #[test]
    fn new_applies_default_theme() {
        let app = app();

        assert_eq!(app.applied_theme(), Theme::Dark);
        assert_eq!(app.surface().theme, Some(Theme::Dark));
        assert_eq!(app.surface().theme_icon, Some(Icon::Sun));
    }

    #[tokio::test]
    async fn theme_toggle_event_flips_theme() {
        let mut app = app();

        app.handle_event(Event::ThemeTogglePressed).await;

        assert_eq!(app.applied_theme(), Theme::Light);
        assert_eq!(app.surface().theme_icon, Some(Icon::Moon));
    }

    #[tokio::test]
    async fn menu_events_toggle_and_close() {
        let mut app = app();

        app.handle_event(Event::MenuTogglePressed).await;
        assert!(app.surface().menu_open);

        app.handle_event(Event::NavLinkFollowed).await;
        assert!(!app.surface().menu_open);
        assert_eq!(app.surface().menu_icon, Some(Icon::Bars));
    }

    #[tokio::test]
    async fn card_press_opens_detail_and_backdrop_closes_it() {
        let mut app = app();
        app.load_records(&[
            record("portfolio-site", Some("TypeScript")),
            record("flutter-app", Some("Dart")),
        ]);

        app.handle_event(Event::CardPressed {
            group: DisplayGroup::Mobile,
            position: 0,
        })
        .await;

        assert!(app.modal_open());
        assert!(app.surface().scroll_locked);
        assert!(app.surface().modal.as_deref().unwrap().contains("flutter app"));

        app.handle_event(Event::BackdropPressed).await;

        assert!(!app.modal_open());
        assert!(!app.surface().scroll_locked);
    }

    #[tokio::test]
    async fn card_press_out_of_range_is_ignored() {
        let mut app = app();
        app.load_records(&[record("portfolio-site", None)]);

        app.handle_event(Event::CardPressed {
            group: DisplayGroup::Web,
            position: 7,
        })
        .await;

        assert!(!app.modal_open());
    }

    #[tokio::test]
    async fn viewport_event_reveals_registered_cards() {
        let mut app = app();
        app.load_records(&[record("portfolio-site", None)]);
        let element_id = gallery::card_element_id(Region::Web, 0);

        app.handle_event(Event::ElementEnteredViewport {
            element_id: element_id.clone(),
        })
        .await;

        assert!(app.surface().revealed.contains(&element_id));
    }

    #[tokio::test]
    async fn static_page_elements_reveal_after_registration() {
        let mut app = app();
        app.observe("about-section");

        app.handle_event(Event::ElementEnteredViewport {
            element_id: "about-section".to_string(),
        })
        .await;
        app.handle_event(Event::ElementEnteredViewport {
            element_id: "never-registered".to_string(),
        })
        .await;

        assert!(app.surface().revealed.contains("about-section"));
        assert!(!app.surface().revealed.contains("never-registered"));
    }

    #[tokio::test]
    async fn contact_submit_without_relay_reports_failure() {
        let mut app = app();

        app.handle_event(Event::ContactSubmitted(ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }))
        .await;

        assert_eq!(app.surface().notices, vec![Notice::MessageFailed]);
        assert!(!app.surface().contact_cleared);
    }

    #[test]
    fn relay_success_shows_confirmation_and_clears_form() {
        let mut app = app();

        app.apply_relay_outcome(Ok(()));

        assert_eq!(app.surface().notices, vec![Notice::MessageSent]);
        assert!(app.surface().contact_cleared);
    }

    #[test]
    fn relay_failure_keeps_form_contents() {
        let mut app = app();

        app.apply_relay_outcome(Err(RelayError::NotConfigured));

        assert_eq!(app.surface().notices, vec![Notice::MessageFailed]);
        assert!(!app.surface().contact_cleared);
    }
}
