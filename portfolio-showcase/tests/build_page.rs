//! End-to-end page assembly from in-memory records: populate the galleries,
//! wrap them in the shell, and check the document a visitor would receive.

use portfolio_showcase::{
    gallery, BufferSurface, PageData, PageRenderer, Region, RepoRecord, RevealObserver, Theme,
    LOAD_ERROR_MESSAGE, MOBILE_EMPTY_MESSAGE, WEB_EMPTY_MESSAGE,
};

fn record(name: &str, language: Option<&str>, description: Option<&str>) -> RepoRecord {
    RepoRecord {
        name: name.to_string(),
        description: description.map(String::from),
        language: language.map(String::from),
        topics: Vec::new(),
        stargazers_count: 7,
        forks_count: 3,
        homepage: None,
        html_url: format!("https://github.com/example/{name}"),
        created_at: None,
        updated_at: None,
    }
}

fn render_page(records: &[RepoRecord], theme: Theme) -> String {
    let mut surface = BufferSurface::new();
    let mut reveal = RevealObserver::new();
    gallery::populate(records, &mut surface, &mut reveal);

    let renderer = PageRenderer::new().unwrap();
    renderer
        .render(&PageData {
            title: "example | Portfolio",
            handle: "example",
            theme,
            web_gallery: surface.region(Region::Web),
            mobile_gallery: surface.region(Region::Mobile),
            contact_enabled: false,
        })
        .unwrap()
}

#[test]
fn page_contains_classified_cards() {
    let records = vec![
        record("portfolio-site", Some("TypeScript"), Some("My personal site")),
        record("flutter-app", Some("Dart"), None),
    ];

    let html = render_page(&records, Theme::Dark);

    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("portfolio site"));
    assert!(html.contains("flutter app"));
    assert!(html.contains("My personal site"));
    assert!(html.contains("Project built with Dart."));

    // Both regions got a card, so neither empty state appears.
    assert!(!html.contains(WEB_EMPTY_MESSAGE));
    assert!(!html.contains(MOBILE_EMPTY_MESSAGE));

    for region in [Region::Web, Region::Mobile] {
        assert!(html.contains(&format!("id=\"{}\"", region.container_id())));
    }
}

#[test]
fn empty_listing_renders_both_empty_states() {
    let html = render_page(&[], Theme::Light);

    assert!(html.contains("data-theme=\"light\""));
    assert!(html.contains(WEB_EMPTY_MESSAGE));
    assert!(html.contains(MOBILE_EMPTY_MESSAGE));
    assert!(!html.contains("project-card"));
}

#[test]
fn fetch_error_page_shows_notice_in_both_regions() {
    let mut surface = BufferSurface::new();
    gallery::render_load_error(&mut surface);

    let renderer = PageRenderer::new().unwrap();
    let html = renderer
        .render(&PageData {
            title: "example | Portfolio",
            handle: "example",
            theme: Theme::Dark,
            web_gallery: surface.region(Region::Web),
            mobile_gallery: surface.region(Region::Mobile),
            contact_enabled: false,
        })
        .unwrap();

    assert_eq!(html.matches(LOAD_ERROR_MESSAGE).count(), 2);
    assert!(!html.contains("project-card"));
}
