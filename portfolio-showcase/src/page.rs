//! Page shell rendering.
//!
//! The document around the galleries comes from an embedded Handlebars
//! template: nav with the theme toggle and hamburger menu, the two gallery
//! regions, the detail overlay container, and the contact form. Gallery
//! markup is produced by the fragment builder and passed in pre-rendered.

use crate::theme::Theme;
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde_json::json;
use thiserror::Error;

const PAGE_TEMPLATE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/page.hbs"));
const PAGE_TEMPLATE_NAME: &str = "page";

/// Errors from shell rendering.
#[derive(Debug, Error)]
pub enum PageError {
    /// The embedded template failed to parse.
    #[error("template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Rendering failed, e.g. a missing variable in strict mode.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
///
/// Default HTML escaping stays on; pre-rendered gallery markup is inserted
/// with triple-stache.
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    // Register the eq helper for conditionals
    hbs.register_helper("eq", Box::new(eq_helper));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq variable "value")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Inputs for one shell render.
#[derive(Debug, Clone)]
pub struct PageData<'a> {
    /// Document title.
    pub title: &'a str,
    /// GitHub handle shown in the footer.
    pub handle: &'a str,
    /// Theme applied to the document root.
    pub theme: Theme,
    /// Pre-rendered web gallery markup.
    pub web_gallery: &'a str,
    /// Pre-rendered mobile gallery markup.
    pub mobile_gallery: &'a str,
    /// Whether the contact form is rendered (relay configured).
    pub contact_enabled: bool,
}

/// Renders the full document.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the embedded shell template registered.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Template`] if the embedded template fails to
    /// parse.
    pub fn new() -> Result<Self, PageError> {
        let mut handlebars = create_handlebars_registry();
        handlebars
            .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { handlebars })
    }

    /// Renders the shell around the given gallery markup.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Render`] if rendering fails.
    pub fn render(&self, data: &PageData<'_>) -> Result<String, PageError> {
        let context = json!({
            "title": data.title,
            "handle": data.handle,
            "theme": data.theme.as_str(),
            "web_gallery": data.web_gallery,
            "mobile_gallery": data.mobile_gallery,
            "contact_enabled": data.contact_enabled,
        });

        Ok(self.handlebars.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data<'a>(theme: Theme) -> PageData<'a> {
        PageData {
            title: "Example | Portfolio",
            handle: "example",
            theme,
            web_gallery: "<div class=\"project-card\">web</div>",
            mobile_gallery: "<p class=\"gallery-empty\">none</p>",
            contact_enabled: true,
        }
    }

    #[test]
    fn renders_theme_on_document_root() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer.render(&sample_data(Theme::Dark)).unwrap();

        assert!(html.contains("data-theme=\"dark\""));
        assert!(html.contains("fa-sun"));
    }

    #[test]
    fn light_theme_shows_moon_icon() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer.render(&sample_data(Theme::Light)).unwrap();

        assert!(html.contains("data-theme=\"light\""));
        assert!(html.contains("fa-moon"));
    }

    #[test]
    fn gallery_markup_is_inserted_unescaped() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer.render(&sample_data(Theme::Dark)).unwrap();

        assert!(html.contains("<div class=\"project-card\">web</div>"));
        assert!(html.contains("<p class=\"gallery-empty\">none</p>"));
    }

    #[test]
    fn title_is_escaped() {
        let renderer = PageRenderer::new().unwrap();
        let mut data = sample_data(Theme::Dark);
        data.title = "<Tags> & Co";

        let html = renderer.render(&data).unwrap();

        assert!(html.contains("&lt;Tags&gt; &amp; Co"));
    }

    #[test]
    fn contact_form_renders_only_when_enabled() {
        let renderer = PageRenderer::new().unwrap();

        let with = renderer.render(&sample_data(Theme::Dark)).unwrap();
        assert!(with.contains("id=\"contact-form\""));

        let mut data = sample_data(Theme::Dark);
        data.contact_enabled = false;
        let without = renderer.render(&data).unwrap();
        assert!(!without.contains("id=\"contact-form\""));
    }

    #[test]
    fn shell_contains_fixed_containers() {
        let renderer = PageRenderer::new().unwrap();

        let html = renderer.render(&sample_data(Theme::Dark)).unwrap();

        for id in ["projects-web", "projects-mobile", "project-modal", "modal-body", "theme-toggle"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }
}
