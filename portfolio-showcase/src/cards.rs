//! Gallery card and detail-view rendering.
//!
//! Pure record-to-fragment transforms: a summary card per listing entry and
//! an expanded detail view for the overlay. Every optional field has a fixed
//! fallback, so rendering never fails on a sparse record.

use crate::fragment::Element;
use crate::repos::{RepoRecord, MOBILE_LANGUAGE};
use chrono::{DateTime, Datelike, Utc};

/// Summary descriptions are capped at this many characters.
pub const DESCRIPTION_LIMIT: usize = 80;

/// Per-column stagger applied to card reveal transitions.
const STAGGER_STEP_MS: usize = 100;

const DETAIL_FALLBACK_DESCRIPTION: &str = "No description provided for this repository.";
const DETAIL_FILLER: &str = "This project is open source and available on GitHub. \
     It demonstrates modern development practices and clean code architecture.";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Derives a hue in `[0, 360)` from a repository name.
///
/// Sum of the name's character codes, mod 360. Purely presentational and
/// recomputed on demand.
#[must_use]
pub fn hue(name: &str) -> u32 {
    name.chars().map(|c| c as u32).sum::<u32>() % 360
}

/// Builds the two-stop gradient for a hue. The second stop is `hue + 40`,
/// left un-wrapped; CSS accepts hues past 360.
#[must_use]
pub fn gradient(hue: u32) -> String {
    format!(
        "linear-gradient(135deg, hsl({}, 60%, 20%), hsl({}, 60%, 10%))",
        hue,
        hue + 40
    )
}

/// Returns the record name with hyphens replaced by spaces.
#[must_use]
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

/// Returns the summary-card description.
///
/// Descriptions longer than [`DESCRIPTION_LIMIT`] characters are capped and
/// suffixed with `"..."`; a missing description falls back to
/// `"Project built with {language}."` with `"code"` when the language is
/// also missing.
#[must_use]
pub fn summary_description(record: &RepoRecord) -> String {
    match record.description_text() {
        Some(description) if description.chars().count() > DESCRIPTION_LIMIT => {
            let capped: String = description.chars().take(DESCRIPTION_LIMIT).collect();
            format!("{capped}...")
        }
        Some(description) => description.to_string(),
        None => format!(
            "Project built with {}.",
            record.language.as_deref().unwrap_or("code")
        ),
    }
}

/// Returns the language tag shown on a card, `"Code"` when missing.
#[must_use]
pub fn language_tag(record: &RepoRecord) -> &str {
    record.language.as_deref().unwrap_or("Code")
}

fn group_icon(record: &RepoRecord) -> &'static str {
    if record.language.as_deref() == Some(MOBILE_LANGUAGE) {
        "fa-mobile-alt"
    } else {
        "fa-laptop-code"
    }
}

/// Builds the clickable summary card for one record.
///
/// `position` is the record's index in the listing; it only drives the
/// cosmetic reveal stagger (`position % 3`).
#[must_use]
pub fn summary_card(record: &RepoRecord, position: usize) -> Element {
    let hue = hue(&record.name);
    let delay_ms = (position % 3) * STAGGER_STEP_MS;

    let header = Element::new("div")
        .class("project-img-container")
        .attr(
            "style",
            format!("background: {}; display:flex; align-items:center; justify-content:center;", gradient(hue)),
        )
        .child(
            Element::new("i")
                .class("fas")
                .class(group_icon(record))
                .attr("style", "font-size:3.5rem; color:rgba(255,255,255,0.2)"),
        )
        .child(
            Element::new("div").class("project-overlay").child(
                Element::new("span")
                    .class("btn")
                    .class("btn-primary")
                    .text("View Details"),
            ),
        );

    let stats = Element::new("div")
        .class("project-stats")
        .child(
            Element::new("span")
                .child(Element::new("i").class("far").class("fa-star"))
                .text(format!(" {}", record.stargazers_count)),
        )
        .child(
            Element::new("span")
                .child(Element::new("i").class("fas").class("fa-code-branch"))
                .text(format!(" {}", record.forks_count)),
        );

    let meta = Element::new("div")
        .class("project-meta")
        .child(
            Element::new("span")
                .class("project-tech")
                .child(Element::new("i").class("fas").class("fa-circle"))
                .text(format!(" {}", language_tag(record))),
        )
        .child(stats);

    let info = Element::new("div")
        .class("project-info")
        .child(
            Element::new("h3")
                .class("project-title")
                .text(display_name(&record.name)),
        )
        .child(
            Element::new("p")
                .class("project-desc")
                .text(summary_description(record)),
        )
        .child(meta);

    Element::new("div")
        .class("project-card")
        .class("reveal")
        .attr("style", format!("transition-delay: {delay_ms}ms"))
        .child(header)
        .child(info)
}

fn long_date(timestamp: &DateTime<Utc>) -> String {
    format!(
        "{} {}, {}",
        MONTHS[timestamp.month0() as usize],
        timestamp.day(),
        timestamp.year()
    )
}

/// Returns the human-readable "Updated ..." label for the detail view.
#[must_use]
pub fn updated_label(record: &RepoRecord) -> String {
    match &record.updated_at {
        Some(timestamp) => format!("Updated {}", long_date(timestamp)),
        None => "Updated N/A".to_string(),
    }
}

/// Builds the expanded detail view for the overlay.
#[must_use]
pub fn detail_view(record: &RepoRecord, hue: u32) -> Element {
    let meta = Element::new("div")
        .class("modal-meta")
        .child(
            Element::new("span")
                .child(Element::new("i").class("fas").class("fa-code"))
                .text(format!(" {}", record.language.as_deref().unwrap_or("N/A"))),
        )
        .child(
            Element::new("span")
                .child(Element::new("i").class("far").class("fa-star"))
                .text(format!(" {} Stars", record.stargazers_count)),
        )
        .child(
            Element::new("span")
                .child(Element::new("i").class("fas").class("fa-history"))
                .text(format!(" {}", updated_label(record))),
        );

    let header = Element::new("div")
        .class("modal-header")
        .child(
            Element::new("h2")
                .class("modal-title")
                .text(display_name(&record.name)),
        )
        .child(meta);

    let banner = Element::new("div")
        .class("modal-banner")
        .attr("style", format!("background: {};", gradient(hue)))
        .child(
            Element::new("i")
                .class("fas")
                .class("fa-laptop-code")
                .attr("style", "font-size: 5rem; color: rgba(255,255,255,0.2);"),
        );

    let body = Element::new("div")
        .class("modal-body-text")
        .child(Element::new("p").text(
            record
                .description_text()
                .unwrap_or(DETAIL_FALLBACK_DESCRIPTION),
        ))
        .child(Element::new("p").text(DETAIL_FILLER));

    let demo_link = record.homepage_url().map(|homepage| {
        Element::new("a")
            .attr("href", homepage)
            .attr("target", "_blank")
            .class("btn")
            .class("btn-secondary")
            .text("Live Demo")
    });

    let actions = Element::new("div")
        .class("modal-actions")
        .child(
            Element::new("a")
                .attr("href", &record.html_url)
                .attr("target", "_blank")
                .class("btn")
                .class("btn-primary")
                .text("View Code"),
        )
        .opt_child(demo_link);

    Element::new("div")
        .child(header)
        .child(banner)
        .child(body)
        .child(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record(name: &str) -> RepoRecord {
        RepoRecord {
            name: name.to_string(),
            description: None,
            language: None,
            topics: Vec::new(),
            stargazers_count: 5,
            forks_count: 2,
            homepage: None,
            html_url: format!("https://github.com/example/{name}"),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn hue_is_deterministic_and_bounded() {
        assert_eq!(hue("abc"), (97 + 98 + 99) % 360);
        assert_eq!(hue("flutter-app"), hue("flutter-app"));
        for name in ["a", "zzzzzzzzzz", "portfolio-site"] {
            assert!(hue(name) < 360);
        }
    }

    #[test]
    fn gradient_leaves_second_stop_unwrapped() {
        assert_eq!(
            gradient(350),
            "linear-gradient(135deg, hsl(350, 60%, 20%), hsl(390, 60%, 10%))"
        );
    }

    #[test]
    fn display_name_replaces_hyphens() {
        assert_eq!(display_name("flutter-todo-app"), "flutter todo app");
        assert_eq!(display_name("plain"), "plain");
    }

    #[test]
    fn description_fallback_names_the_language() {
        let mut record = sample_record("tool");
        record.language = Some("Go".to_string());

        assert_eq!(summary_description(&record), "Project built with Go.");
    }

    #[test]
    fn description_fallback_without_language() {
        let record = sample_record("tool");

        assert_eq!(summary_description(&record), "Project built with code.");
    }

    #[test]
    fn empty_description_uses_fallback() {
        let mut record = sample_record("tool");
        record.description = Some(String::new());
        record.language = Some("Rust".to_string());

        assert_eq!(summary_description(&record), "Project built with Rust.");
    }

    #[test]
    fn long_descriptions_are_capped_with_ellipsis() {
        let mut record = sample_record("tool");
        record.description = Some("x".repeat(200));

        let rendered = summary_description(&record);

        assert_eq!(rendered.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(rendered.ends_with("..."));
    }

    #[test]
    fn short_descriptions_pass_through() {
        let mut record = sample_record("tool");
        record.description = Some("A small tool.".to_string());

        assert_eq!(summary_description(&record), "A small tool.");
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let mut record = sample_record("tool");
        record.description = Some("é".repeat(100));

        let rendered = summary_description(&record);

        assert_eq!(rendered.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(rendered.ends_with("..."));
    }

    #[test]
    fn summary_card_never_panics_on_sparse_records() {
        let card = summary_card(&sample_record("bare"), 0);
        let html = card.to_html();

        assert!(html.contains("Project built with code."));
        assert!(html.contains("Code"));
    }

    #[test]
    fn summary_card_staggers_by_position() {
        for (position, expected) in [(0, "0ms"), (1, "100ms"), (2, "200ms"), (3, "0ms")] {
            let card = summary_card(&sample_record("tool"), position);
            let style = card.attribute("style").unwrap();
            assert_eq!(style, format!("transition-delay: {expected}"));
        }
    }

    #[test]
    fn summary_card_icon_follows_language() {
        let mut record = sample_record("app");
        record.language = Some("Dart".to_string());
        assert!(summary_card(&record, 0).to_html().contains("fa-mobile-alt"));

        record.language = Some("TypeScript".to_string());
        assert!(summary_card(&record, 0).to_html().contains("fa-laptop-code"));
    }

    #[test]
    fn detail_view_formats_updated_date() {
        let mut record = sample_record("tool");
        record.updated_at = Some(Utc.with_ymd_and_hms(2026, 1, 5, 18, 30, 0).unwrap());

        assert_eq!(updated_label(&record), "Updated January 5, 2026");
    }

    #[test]
    fn detail_view_handles_missing_timestamp() {
        assert_eq!(updated_label(&sample_record("tool")), "Updated N/A");
    }

    #[test]
    fn detail_view_falls_back_on_missing_fields() {
        let view = detail_view(&sample_record("bare"), 120);
        let html = view.to_html();

        assert!(html.contains("N/A"));
        assert!(html.contains("No description provided for this repository."));
        assert!(html.contains("View Code"));
        assert!(!html.contains("Live Demo"));
    }

    #[test]
    fn detail_view_links_homepage_only_when_present() {
        let mut record = sample_record("site");
        record.homepage = Some("https://example.dev".to_string());

        let html = detail_view(&record, 10).to_html();

        assert!(html.contains("Live Demo"));
        assert!(html.contains("https://example.dev"));
    }

    #[test]
    fn detail_view_escapes_description_markup() {
        let mut record = sample_record("tool");
        record.description = Some("<img onerror=x>".to_string());

        let html = detail_view(&record, 0).to_html();

        assert!(html.contains("&lt;img onerror=x&gt;"));
        assert!(!html.contains("<img onerror=x>"));
    }
}
