use dioxus::prelude::*;

use crate::components::GithubProjects;
use crate::routes::Route;
use crate::site::use_site;

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let profile = site.content.profile.clone();
    let featured = site.config.github.featured_limit;

    rsx! {
        section { class: "hero",
            div { class: "hero-content",
                h1 { "Welcome to My Portfolio!" }
                p { class: "hero-intro", "I'm {profile.name}, a {profile.role}" }
                p { class: "hero-tagline", "{profile.tagline}" }
                div { class: "hero-cta",
                    Link { class: "btn btn-primary", to: Route::Projects {}, "Explore Projects" }
                    Link { class: "btn btn-secondary", to: Route::Contact {}, "Get In Touch" }
                }
            }
        }
        section { class: "featured",
            h2 { class: "section-title", "Featured Projects" }
            GithubProjects { limit: featured, show_filters: false }
        }
    }
}
