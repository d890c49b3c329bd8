//! Repository gallery model.
//!
//! The gallery lists the public, non-fork repositories of one account,
//! most recently updated first, cut to a fixed number of cards. Visitors
//! can narrow the cards by language or topic.

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Repositories requested per call. The gallery never paginates.
pub const PER_PAGE: usize = 100;

/// Topic badges shown per card.
pub const MAX_CARD_TOPICS: usize = 3;

/// A public repository as returned by the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
}

impl Repository {
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description available")
    }

    /// Homepage link, if one is set. GitHub reports unset homepages as `""`.
    pub fn demo_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }

    pub fn card_topics(&self) -> &[String] {
        &self.topics[..self.topics.len().min(MAX_CARD_TOPICS)]
    }

    /// "Mon d, yyyy" on the visitor's local calendar.
    pub fn updated_label(&self) -> String {
        self.updated_label_in(&Local)
    }

    /// "Mon d, yyyy" on the calendar of `tz`.
    pub fn updated_label_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.updated_at
            .with_timezone(tz)
            .format("%b %-d, %Y")
            .to_string()
    }
}

/// Which account to list and how many cards to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoQuery {
    pub username: String,
    pub limit: usize,
}

impl RepoQuery {
    pub fn new(username: impl Into<String>, limit: usize) -> Self {
        Self {
            username: username.into(),
            limit,
        }
    }

    /// Listing endpoint for this account.
    pub fn url(&self, api_base: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            api_base.trim_end_matches('/'),
            self.username,
            PER_PAGE
        )
    }

    /// Public profile page, for the "view all" link.
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }
}

/// Decode the listing response body.
pub fn parse_repositories(body: &str) -> Result<Vec<Repository>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Drop forks, order by last update (newest first), keep at most `limit`.
pub fn select_repositories(mut repos: Vec<Repository>, limit: usize) -> Vec<Repository> {
    repos.retain(|repo| !repo.fork);
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repos.truncate(limit);
    repos
}

/// Gallery filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RepoFilter {
    #[default]
    All,
    /// A language or a topic.
    Tag(String),
}

impl RepoFilter {
    pub fn matches(&self, repo: &Repository) -> bool {
        match self {
            RepoFilter::All => true,
            RepoFilter::Tag(tag) => {
                repo.language.as_deref() == Some(tag.as_str()) || repo.topics.iter().any(|t| t == tag)
            }
        }
    }

    /// Chip text: the tag with its first letter upper-cased.
    pub fn label(&self) -> String {
        match self {
            RepoFilter::All => "All".to_string(),
            RepoFilter::Tag(tag) => {
                let mut chars = tag.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl fmt::Display for RepoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoFilter::All => f.write_str("all"),
            RepoFilter::Tag(tag) => f.write_str(tag),
        }
    }
}

/// `All`, then each language, then each topic, in first-seen order without
/// repeats.
pub fn filter_options(repos: &[Repository]) -> Vec<RepoFilter> {
    let mut seen = HashSet::new();
    let mut options = vec![RepoFilter::All];

    let languages = repos.iter().filter_map(|r| r.language.as_deref());
    let topics = repos.iter().flat_map(|r| r.topics.iter().map(String::as_str));

    for tag in languages.chain(topics) {
        if seen.insert(tag) {
            options.push(RepoFilter::Tag(tag.to_string()));
        }
    }
    options
}

pub fn apply_filter<'a>(repos: &'a [Repository], filter: &RepoFilter) -> Vec<&'a Repository> {
    repos.iter().filter(|r| filter.matches(r)).collect()
}

/// Anything that can list an account's repositories.
#[async_trait(?Send)]
pub trait RepoSource {
    async fn list_repositories(&self, query: &RepoQuery) -> Result<Vec<Repository>, FetchError>;
}

/// Fetch and select the gallery cards for `query`.
pub async fn load_gallery<S: RepoSource + ?Sized>(
    source: &S,
    query: &RepoQuery,
) -> Result<Vec<Repository>, FetchError> {
    tracing::debug!(username = %query.username, limit = query.limit, "Loading repository gallery");

    let repos = match source.list_repositories(query).await {
        Ok(repos) => repos,
        Err(e) => {
            tracing::error!(username = %query.username, error = %e, "Repository listing failed");
            return Err(e);
        }
    };

    let total = repos.len();
    let selected = select_repositories(repos, query.limit);
    tracing::info!(total, shown = selected.len(), "Repository gallery loaded");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn repo(id: u64, language: Option<&str>, topics: &[&str]) -> Repository {
        Repository {
            id,
            name: format!("repo-{id}"),
            description: None,
            html_url: format!("https://github.com/u/repo-{id}"),
            homepage: None,
            stargazers_count: 0,
            forks_count: 0,
            language: language.map(str::to_string),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            updated_at: DateTime::from_timestamp(1_700_000_000 + id as i64, 0).unwrap(),
            fork: false,
        }
    }

    #[test]
    fn test_url_shape() {
        let query = RepoQuery::new("octocat", 6);
        assert_eq!(
            query.url("https://api.github.com/"),
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=100"
        );
        assert_eq!(query.profile_url(), "https://github.com/octocat");
    }

    #[test]
    fn test_filter_options_dedupe_across_groups() {
        let repos = vec![
            repo(1, Some("Rust"), &["cli", "Rust"]),
            repo(2, Some("TypeScript"), &["web"]),
            repo(3, Some("Rust"), &["cli"]),
            repo(4, None, &[]),
        ];
        let labels: Vec<String> = filter_options(&repos).iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["all", "Rust", "TypeScript", "cli", "web"]);
    }

    #[test]
    fn test_tag_matches_language_or_topic() {
        let r = repo(1, Some("Rust"), &["wasm"]);
        assert!(RepoFilter::Tag("Rust".into()).matches(&r));
        assert!(RepoFilter::Tag("wasm".into()).matches(&r));
        assert!(!RepoFilter::Tag("rust".into()).matches(&r));
        assert!(RepoFilter::All.matches(&r));
    }

    #[test]
    fn test_labels_capitalize() {
        assert_eq!(RepoFilter::Tag("react-native".into()).label(), "React-native");
        assert_eq!(RepoFilter::All.label(), "All");
    }

    #[test]
    fn test_card_helpers() {
        let mut r = repo(1, None, &["a", "b", "c", "d"]);
        assert_eq!(r.card_topics().len(), 3);
        assert_eq!(r.description_or_default(), "No description available");
        assert_eq!(r.demo_url(), None);

        r.homepage = Some(String::new());
        assert_eq!(r.demo_url(), None);
        r.homepage = Some("https://demo.example".into());
        assert_eq!(r.demo_url(), Some("https://demo.example"));
    }

    #[test]
    fn test_updated_label() {
        let mut r = repo(1, None, &[]);
        r.updated_at = "2024-02-05T10:00:00Z".parse().unwrap();
        assert_eq!(r.updated_label_in(&Utc), "Feb 5, 2024");
    }

    #[test]
    fn test_updated_label_follows_local_calendar() {
        let mut r = repo(1, None, &[]);
        r.updated_at = "2024-02-05T23:30:00Z".parse().unwrap();

        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(r.updated_label_in(&east), "Feb 6, 2024");
        assert_eq!(r.updated_label_in(&west), "Feb 5, 2024");
        assert_eq!(r.updated_label(), r.updated_label_in(&Local));
    }
}
