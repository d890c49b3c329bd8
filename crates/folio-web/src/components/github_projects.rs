//! Repository gallery fed by the GitHub API.

use dioxus::prelude::*;
use folio_core::{RepoFilter, RepoQuery, Repository, apply_filter, filter_options, load_gallery};

use crate::fetch::GithubClient;
use crate::site::use_site;

/// Fetches the account's repositories once per mount and renders them as
/// filterable cards.
#[component]
pub fn GithubProjects(limit: usize, #[props(default = true)] show_filters: bool) -> Element {
    let site = use_site();
    let github = site.config.github.clone();
    let query = RepoQuery::new(github.username.clone(), limit);
    let profile_url = query.profile_url();

    let repos = use_resource(move || {
        let client = GithubClient::new(github.api_base.clone());
        let query = query.clone();
        async move { load_gallery(&client, &query).await }
    });
    let mut filter = use_signal(|| RepoFilter::All);

    let body = match &*repos.read() {
        None => rsx! {
            div { class: "loading",
                div { class: "spinner", "aria-label": "Loading repositories" }
            }
        },
        Some(Err(e)) => {
            let message = e.user_message();
            rsx! {
                div { class: "error-message",
                    p { "{message}" }
                    p { "Check your internet connection or try again later." }
                }
            }
        }
        Some(Ok(list)) => {
            let options = filter_options(list);
            let active = filter();
            let visible: Vec<Repository> =
                apply_filter(list, &active).into_iter().cloned().collect();

            rsx! {
                if show_filters && options.len() > 1 {
                    div { class: "filter-chips",
                        for option in options {
                            FilterChip {
                                key: "{option}",
                                active: option == active,
                                option: option.clone(),
                                onselect: move |chosen| filter.set(chosen),
                            }
                        }
                    }
                }
                if visible.is_empty() {
                    p { class: "empty-state", "No repositories match the selected filter." }
                } else {
                    div { class: "repo-grid",
                        for repo in visible {
                            RepoCard { key: "{repo.id}", repo }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "github-projects",
            {body}
            div { class: "view-all",
                a {
                    class: "btn btn-secondary",
                    href: "{profile_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View all repositories"
                }
            }
        }
    }
}

#[component]
fn FilterChip(option: RepoFilter, active: bool, onselect: EventHandler<RepoFilter>) -> Element {
    let class = if active { "chip active" } else { "chip" };
    let label = option.label();

    rsx! {
        button {
            class,
            "aria-pressed": "{active}",
            onclick: move |_| onselect.call(option.clone()),
            "{label}"
        }
    }
}

/// One repository card.
#[component]
pub fn RepoCard(repo: Repository) -> Element {
    let description = repo.description_or_default().to_string();
    let topics = repo.card_topics().to_vec();
    let updated = repo.updated_label();
    let demo = repo.demo_url().map(str::to_string);

    rsx! {
        article { class: "repo-card",
            header { class: "repo-card-header",
                h3 { class: "repo-name", "{repo.name}" }
                div { class: "repo-stats",
                    span { class: "stat", title: "Stars", "★ {repo.stargazers_count}" }
                    span { class: "stat", title: "Forks", "⑂ {repo.forks_count}" }
                }
            }
            p { class: "repo-description", "{description}" }
            div { class: "repo-tags",
                if let Some(language) = &repo.language {
                    span { class: "badge badge-language", "{language}" }
                }
                for topic in topics {
                    span { class: "badge badge-topic", "{topic}" }
                }
            }
            footer { class: "repo-card-footer",
                span { class: "repo-updated", "Updated: {updated}" }
                div { class: "repo-links",
                    if let Some(demo) = demo {
                        a {
                            href: "{demo}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Demo"
                        }
                    }
                    a {
                        href: "{repo.html_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "GitHub"
                    }
                }
            }
        }
    }
}
