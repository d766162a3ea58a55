//! Repository listing and display-group classification.
//!
//! One call against the GitHub user-repos endpoint per page load, sorted by
//! recency and capped at [`PAGE_SIZE`]. Each record is then classified into
//! one of the two gallery groups by a pure, per-record rule.

use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Fixed page size for the listing call.
pub const PAGE_SIZE: u8 = 12;

/// Primary language marking a repository as a mobile project.
pub const MOBILE_LANGUAGE: &str = "Dart";

/// Topic and name keywords marking a repository as a mobile project.
const MOBILE_KEYWORDS: [&str; 2] = ["flutter", "dart"];

/// Errors from the listing call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The handle does not exist on GitHub.
    #[error("no GitHub user found for handle '{handle}'")]
    UserNotFound { handle: String },

    /// Any other API or transport failure.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),
}

/// One repository entry from the listing endpoint.
///
/// Immutable once received; optional fields deserialize to `None`/empty
/// rather than failing the whole listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    /// Repository name.
    pub name: String,

    /// Short description, when the owner wrote one.
    #[serde(default)]
    pub description: Option<String>,

    /// Primary language tag.
    #[serde(default)]
    pub language: Option<String>,

    /// Topic tags.
    #[serde(default)]
    pub topics: Vec<String>,

    /// Star count.
    pub stargazers_count: u64,

    /// Fork count.
    pub forks_count: u64,

    /// Deployed-site URL, when configured. May be an empty string.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Canonical GitHub URL.
    pub html_url: String,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RepoRecord {
    /// Returns the homepage URL, treating an empty string as absent.
    pub fn homepage_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|url| !url.is_empty())
    }

    /// Returns the description, treating an empty string as absent.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }
}

/// The gallery bucket a record renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayGroup {
    Web,
    Mobile,
}

impl DisplayGroup {
    /// Returns the group as a short identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
        }
    }
}

#[derive(Serialize)]
struct ListParams {
    sort: &'static str,
    per_page: u8,
}

/// Fetches the most recently updated public repositories for a handle.
///
/// Issues `GET /users/{handle}/repos?sort=updated&per_page=12` once; there
/// is no retry or timeout beyond the client's own.
///
/// # Errors
///
/// Returns [`FetchError::UserNotFound`] for an unknown handle and
/// [`FetchError::GitHub`] for any other non-success status or transport
/// failure.
pub async fn fetch_repositories(
    octocrab: &Octocrab,
    handle: &str,
) -> Result<Vec<RepoRecord>, FetchError> {
    info!(handle, per_page = PAGE_SIZE, "Fetching repositories");

    let route = format!("/users/{handle}/repos");
    let params = ListParams {
        sort: "updated",
        per_page: PAGE_SIZE,
    };

    let records: Vec<RepoRecord> = octocrab
        .get(&route, Some(&params))
        .await
        .map_err(|e| map_fetch_error(e, handle))?;

    debug!(count = records.len(), "Listing call succeeded");
    Ok(records)
}

fn map_fetch_error(error: octocrab::Error, handle: &str) -> FetchError {
    match &error {
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404 => {
            FetchError::UserNotFound {
                handle: handle.to_string(),
            }
        }
        _ => FetchError::GitHub(error),
    }
}

/// Classifies a record into its display group.
///
/// A record is mobile iff its language is Dart, its topics contain
/// "flutter" or "dart", or its lowercased name contains either keyword as a
/// substring. Pure in (language, topics, name); sibling records and
/// ordering play no part.
#[must_use]
pub fn classify(record: &RepoRecord) -> DisplayGroup {
    if record.language.as_deref() == Some(MOBILE_LANGUAGE) {
        return DisplayGroup::Mobile;
    }

    if record
        .topics
        .iter()
        .any(|topic| MOBILE_KEYWORDS.contains(&topic.as_str()))
    {
        return DisplayGroup::Mobile;
    }

    let name = record.name.to_lowercase();
    if MOBILE_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
        return DisplayGroup::Mobile;
    }

    DisplayGroup::Web
}
