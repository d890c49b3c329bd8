use dioxus::prelude::*;

use crate::site::use_site;

#[component]
pub fn About() -> Element {
    let site = use_site();
    let profile = site.content.profile.clone();
    let stats = site.content.stats.clone();

    rsx! {
        section { class: "about",
            h1 { class: "section-title", "About Me" }
            div { class: "about-grid",
                div { class: "about-text",
                    for paragraph in profile.about {
                        p { "{paragraph}" }
                    }
                }
                AboutStats { stats }
            }
        }
    }
}

#[component]
fn AboutStats(stats: Vec<folio_core::Stat>) -> Element {
    rsx! {
        div { class: "about-stats",
            for stat in stats {
                div { class: "stat-item",
                    span { class: "stat-number", "{stat.value}" }
                    span { class: "stat-label", "{stat.label}" }
                }
            }
        }
    }
}
