use dioxus::prelude::*;

use crate::components::GithubProjects;
use crate::site::use_site;

#[component]
pub fn Projects() -> Element {
    let site = use_site();
    let limit = site.config.github.gallery_limit;

    rsx! {
        section { class: "projects",
            h1 { class: "section-title", "My Projects" }
            p { class: "section-subtitle",
                "Recent open source work, straight from GitHub."
            }
            GithubProjects { limit }
        }
    }
}
