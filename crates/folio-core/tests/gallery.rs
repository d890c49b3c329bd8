//! Integration tests for the repository gallery
//!
//! These drive `load_gallery` through fake sources to check the full path
//! from an API payload to the cards a visitor sees.

use std::cell::RefCell;

use async_trait::async_trait;
use folio_core::{
    FetchError, RepoFilter, RepoQuery, RepoSource, Repository, apply_filter, filter_options,
    load_gallery, parse_repositories,
};

const PAYLOAD: &str = r#"[
    {
        "id": 1,
        "name": "old-tool",
        "description": "An older tool",
        "html_url": "https://github.com/octocat/old-tool",
        "homepage": "",
        "stargazers_count": 3,
        "forks_count": 1,
        "language": "Rust",
        "topics": ["cli"],
        "updated_at": "2022-01-10T08:00:00Z",
        "fork": false,
        "owner": { "login": "octocat" }
    },
    {
        "id": 2,
        "name": "forked-lib",
        "description": null,
        "html_url": "https://github.com/octocat/forked-lib",
        "homepage": null,
        "stargazers_count": 0,
        "forks_count": 0,
        "language": "Go",
        "topics": [],
        "updated_at": "2024-06-01T08:00:00Z",
        "fork": true
    },
    {
        "id": 3,
        "name": "portfolio",
        "description": "This site",
        "html_url": "https://github.com/octocat/portfolio",
        "homepage": "https://octocat.dev",
        "stargazers_count": 12,
        "forks_count": 2,
        "language": "Rust",
        "topics": ["wasm", "dioxus", "portfolio", "web"],
        "updated_at": "2024-05-20T08:00:00Z",
        "fork": false
    },
    {
        "id": 4,
        "name": "dashboard",
        "description": "Charts",
        "html_url": "https://github.com/octocat/dashboard",
        "homepage": null,
        "stargazers_count": 5,
        "forks_count": 0,
        "language": "TypeScript",
        "updated_at": "2023-03-02T08:00:00Z",
        "fork": false
    }
]"#;

/// Serves a fixed payload and records the queries it saw.
struct FixtureSource {
    body: &'static str,
    seen: RefCell<Vec<RepoQuery>>,
}

impl FixtureSource {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            seen: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl RepoSource for FixtureSource {
    async fn list_repositories(&self, query: &RepoQuery) -> Result<Vec<Repository>, FetchError> {
        self.seen.borrow_mut().push(query.clone());
        parse_repositories(self.body)
    }
}

struct FailingSource(FetchError);

#[async_trait(?Send)]
impl RepoSource for FailingSource {
    async fn list_repositories(&self, _query: &RepoQuery) -> Result<Vec<Repository>, FetchError> {
        Err(self.0.clone())
    }
}

#[test]
fn test_gallery_excludes_forks_and_sorts_newest_first() {
    let source = FixtureSource::new(PAYLOAD);
    let query = RepoQuery::new("octocat", 6);

    let repos = tokio_test::block_on(load_gallery(&source, &query)).unwrap();

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["portfolio", "dashboard", "old-tool"]);
    assert!(repos.iter().all(|r| !r.fork));
    assert_eq!(source.seen.borrow().as_slice(), &[query]);
}

#[test]
fn test_gallery_truncates_to_limit() {
    let source = FixtureSource::new(PAYLOAD);
    let repos = tokio_test::block_on(load_gallery(&source, &RepoQuery::new("octocat", 2))).unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "portfolio");
}

#[test]
fn test_missing_topics_default_to_empty() {
    let repos = parse_repositories(PAYLOAD).unwrap();
    let dashboard = repos.iter().find(|r| r.name == "dashboard").unwrap();
    assert!(dashboard.topics.is_empty());
}

#[test]
fn test_filters_over_loaded_gallery() {
    let source = FixtureSource::new(PAYLOAD);
    let repos = tokio_test::block_on(load_gallery(&source, &RepoQuery::new("octocat", 6))).unwrap();

    let options: Vec<String> = filter_options(&repos).iter().map(|f| f.label()).collect();
    assert_eq!(
        options,
        ["All", "Rust", "TypeScript", "Wasm", "Dioxus", "Portfolio", "Web", "Cli"]
    );

    let rust = apply_filter(&repos, &RepoFilter::Tag("Rust".into()));
    assert_eq!(rust.len(), 2);

    let none = apply_filter(&repos, &RepoFilter::Tag("Haskell".into()));
    assert!(none.is_empty());
}

#[test]
fn test_failure_surfaces_static_message() {
    for error in [
        FetchError::Network("offline".into()),
        FetchError::Status(403),
        FetchError::Decode("eof".into()),
    ] {
        let source = FailingSource(error.clone());
        let result = tokio_test::block_on(load_gallery(&source, &RepoQuery::new("octocat", 6)));
        let err = result.unwrap_err();
        assert_eq!(err, error);
        assert_eq!(err.user_message(), "Error fetching GitHub repositories");
    }
}

#[test]
fn test_malformed_payload_is_decode_error() {
    let source = FixtureSource::new(r#"{"message": "API rate limit exceeded"}"#);
    let result = tokio_test::block_on(load_gallery(&source, &RepoQuery::new("octocat", 6)));
    assert!(matches!(result, Err(FetchError::Decode(_))));
}
