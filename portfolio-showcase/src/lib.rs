#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod cards;
pub mod config;
pub mod fragment;
pub mod gallery;
pub mod page;
pub mod relay;
pub mod repos;
pub mod runner;
pub mod surface;
pub mod theme;
pub mod ui;

pub use cards::{detail_view, display_name, gradient, hue, summary_card, summary_description};
pub use config::{ConfigError, SiteConfig};
pub use fragment::{Element, Node};
pub use gallery::{
    populate, render_load_error, Classified, LOAD_ERROR_MESSAGE, MOBILE_EMPTY_MESSAGE,
    WEB_EMPTY_MESSAGE,
};
pub use page::{create_handlebars_registry, PageData, PageError, PageRenderer};
pub use relay::{ContactMessage, RelayClient, RelayConfig, RelayError, DEFAULT_RELAY_ENDPOINT};
pub use repos::{classify, fetch_repositories, DisplayGroup, FetchError, RepoRecord, PAGE_SIZE};
pub use runner::{RunSummary, Runner, RunnerConfig, RunnerError};
pub use surface::{BufferSurface, Icon, Notice, Region, RenderSurface};
pub use theme::{
    FilePreferences, MemoryPreferences, PreferenceStore, Theme, ThemeController, THEME_KEY,
};
pub use ui::{App, Event, MenuState, ModalState, RevealObserver};
