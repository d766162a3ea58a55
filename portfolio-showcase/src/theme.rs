//! Theme preference persistence and application.
//!
//! The preference lives under a single key in a small key/value store. The
//! store is read once at startup; after that the in-memory applied value is
//! authoritative for the session, and storage failures are swallowed with a
//! warning rather than surfaced.

use crate::surface::{Icon, RenderSurface};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// The page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Error returned when parsing an unknown theme name.
#[derive(Debug, Error)]
#[error("unknown theme '{0}', expected \"light\" or \"dark\"")]
pub struct ParseThemeError(String);

impl Theme {
    /// Returns the theme as its persisted string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the other theme.
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the toggle icon shown while this theme is applied.
    ///
    /// The icon advertises the theme a toggle would switch to: a moon while
    /// light is applied, a sun while dark is applied.
    #[must_use]
    pub fn toggle_icon(&self) -> Icon {
        match self {
            Self::Light => Icon::Moon,
            Self::Dark => Icon::Sun,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Durable key/value storage for user preferences.
///
/// Implementations must not fail loudly: a missing value is `None`, and a
/// write that cannot be persisted is dropped silently, leaving the caller's
/// in-memory state as the source of truth.
pub trait PreferenceStore {
    /// Reads a persisted value.
    fn get(&self, key: &str) -> Option<String>;

    /// Persists a value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store holding preferences as a flat TOML table.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Creates a store backed by the given file. The file is created on the
    /// first successful write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_table(&self) -> toml::Table {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No preference file");
                return toml::Table::new();
            }
        };

        match contents.parse::<toml::Table>() {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable preference file");
                toml::Table::new()
            }
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table()
            .get(key)
            .and_then(|value| value.as_str())
            .map(String::from)
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut table = self.read_table();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        let serialized = match toml::to_string(&table) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(error = %e, "Failed to serialize preferences, keeping in-memory state");
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist preference, keeping in-memory state");
        }
    }
}

/// Injectable holder for the applied theme.
///
/// Reads the persisted preference once at init, applies it to the surface,
/// and keeps the applied value for the rest of the session.
pub struct ThemeController {
    applied: Theme,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Creates a controller over the given store. Nothing is applied until
    /// [`init`](Self::init).
    #[must_use]
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            applied: Theme::default(),
            store,
        }
    }

    /// Returns the persisted preference, defaulting to dark when absent or
    /// unreadable.
    pub fn preference(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Persists a preference.
    pub fn set_preference(&mut self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Returns the currently applied theme.
    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied
    }

    /// Applies a theme: document marker plus toggle icon. Idempotent.
    pub fn apply(&mut self, theme: Theme, surface: &mut dyn RenderSurface) {
        surface.set_document_theme(theme);
        surface.set_theme_icon(theme.toggle_icon());
        self.applied = theme;
    }

    /// Reads the preference and applies it. Called once at page load.
    pub fn init(&mut self, surface: &mut dyn RenderSurface) {
        let theme = self.preference();
        debug!(theme = %theme, "Applying initial theme");
        self.apply(theme, surface);
    }

    /// Applies and persists the opposite of the applied theme.
    pub fn toggle(&mut self, surface: &mut dyn RenderSurface) -> Theme {
        let next = self.applied.opposite();
        self.apply(next, surface);
        self.set_preference(next);
        next
    }
}
