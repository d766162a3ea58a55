//! Orchestrates a full page build.
//!
//! One run mirrors one page load: apply the persisted theme, fetch the
//! listing once, populate the galleries (or render the inline error state),
//! wrap everything in the shell, and write the document out.

use crate::config::{ConfigError, SiteConfig};
use crate::gallery;
use crate::page::{PageData, PageError, PageRenderer};
use crate::repos;
use crate::surface::{BufferSurface, Region};
use crate::theme::{FilePreferences, Theme, ThemeController};
use crate::ui::RevealObserver;
use octocrab::Octocrab;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Configuration for one build run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Site settings.
    site: SiteConfig,
    /// GitHub token; anonymous access works but is rate-limited harder.
    token: Option<String>,
    /// Where the rendered page is written.
    output_path: PathBuf,
    /// Preference state file.
    state_path: PathBuf,
    /// Theme forced for this run instead of the stored preference.
    theme_override: Option<Theme>,
}

impl RunnerConfig {
    /// Creates a configuration for a run. The preference state defaults to
    /// `preferences.toml` next to the output file.
    pub fn new(site: SiteConfig, output_path: PathBuf) -> Self {
        let state_path = output_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("preferences.toml");
        Self {
            site,
            token: None,
            output_path,
            state_path,
            theme_override: None,
        }
    }

    /// Sets the GitHub token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Sets a custom preference state path.
    pub fn with_state_path(mut self, state_path: PathBuf) -> Self {
        self.state_path = state_path;
        self
    }

    /// Forces a theme for this run.
    pub fn with_theme_override(mut self, theme: Theme) -> Self {
        self.theme_override = Some(theme);
        self
    }

    /// Returns the site settings.
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Returns the output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the preference state path.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }
}

/// Errors that can occur while building the page.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Shell template errors.
    #[error(transparent)]
    Page(#[from] PageError),

    /// Output write errors.
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Summary of a build run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories returned by the listing call.
    pub repositories_fetched: usize,

    /// Number of cards rendered into the web region.
    pub web_count: usize,

    /// Number of cards rendered into the mobile region.
    pub mobile_count: usize,

    /// Whether the listing call failed and the error state was rendered.
    pub fetch_failed: bool,

    /// Theme applied to the page.
    pub theme: Theme,
}

impl RunSummary {
    /// Returns true when the page was built without the error state.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.fetch_failed
    }
}

/// Orchestrates a full fetch-classify-render run.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
    renderer: PageRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the GitHub client or the shell renderer
    /// cannot be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = match &config.token {
            Some(token) => Octocrab::builder().personal_token(token.clone()).build()?,
            None => Octocrab::builder().build()?,
        };
        let renderer = PageRenderer::new()?;
        Ok(Self {
            config,
            octocrab,
            renderer,
        })
    }

    /// Executes the full build flow.
    ///
    /// A failed listing call is not fatal: the page is still produced, with
    /// the fixed error notice in both gallery regions, and the summary marks
    /// the failure.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the shell cannot be rendered or the output
    /// file cannot be written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::default();
        let mut surface = BufferSurface::new();
        let mut reveal = RevealObserver::new();

        let mut theme = ThemeController::new(Box::new(FilePreferences::new(
            self.config.state_path.clone(),
        )));
        if let Some(forced) = self.config.theme_override {
            theme.set_preference(forced);
        }
        theme.init(&mut surface);
        summary.theme = theme.applied();

        match repos::fetch_repositories(&self.octocrab, &self.config.site.handle).await {
            Ok(records) => {
                summary.repositories_fetched = records.len();
                let classified = gallery::populate(&records, &mut surface, &mut reveal);
                summary.web_count = classified.web.len();
                summary.mobile_count = classified.mobile.len();
            }
            Err(e) => {
                error!(error = %e, "Unable to load projects");
                gallery::render_load_error(&mut surface);
                summary.fetch_failed = true;
            }
        }

        let title = self.config.site.page_title();
        let html = self.renderer.render(&PageData {
            title: &title,
            handle: &self.config.site.handle,
            theme: summary.theme,
            web_gallery: surface.region(Region::Web),
            mobile_gallery: surface.region(Region::Mobile),
            contact_enabled: self.config.site.relay.is_some(),
        })?;

        std::fs::write(&self.config.output_path, html).map_err(|e| RunnerError::Io {
            path: self.config.output_path.display().to_string(),
            source: e,
        })?;

        info!(
            path = %self.config.output_path.display(),
            web = summary.web_count,
            mobile = summary.mobile_count,
            "Wrote portfolio page"
        );
        Ok(summary)
    }
}
