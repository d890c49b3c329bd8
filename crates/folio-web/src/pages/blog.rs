use dioxus::prelude::*;

use crate::site::use_site;

/// Post summaries, newest first.
#[component]
pub fn Blog() -> Element {
    let site = use_site();
    let posts: Vec<_> = site
        .content
        .recent_posts()
        .into_iter()
        .map(|post| (post.clone(), post.published_label()))
        .collect();

    rsx! {
        section { class: "blog",
            h1 { class: "section-title", "Blog" }
            if posts.is_empty() {
                p { class: "empty-state", "No posts yet." }
            }
            for (post, published) in posts {
                article { key: "{post.slug}", class: "post-summary",
                    h2 { "{post.title}" }
                    time {
                        datetime: "{post.published}",
                        "{published}"
                    }
                    p { "{post.summary}" }
                    if !post.tags.is_empty() {
                        ul { class: "tag-list",
                            for tag in post.tags {
                                li { class: "badge", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
