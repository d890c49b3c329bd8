//! Career milestones, newest first.

use dioxus::prelude::*;

use crate::site::use_site;

/// Vertical timeline. `revealed` switches on the entrance animation.
#[component]
pub fn JourneyTimeline(#[props(default = true)] revealed: bool) -> Element {
    let site = use_site();
    let milestones: Vec<_> = site.content.timeline().into_iter().cloned().collect();

    rsx! {
        ol { class: if revealed { "timeline revealed" } else { "timeline" },
            for (i, milestone) in milestones.into_iter().enumerate() {
                li {
                    key: "{milestone.year}-{i}",
                    class: if i % 2 == 0 { "timeline-item left" } else { "timeline-item right" },
                    style: format!("--reveal-delay: {}ms", i * 120),
                    div { class: "timeline-marker" }
                    div { class: "timeline-content",
                        span { class: "timeline-year", "{milestone.year}" }
                        h3 { "{milestone.title}" }
                        p { "{milestone.description}" }
                        if !milestone.technologies.is_empty() {
                            ul { class: "tech-list",
                                for tech in milestone.technologies {
                                    li { class: "badge", "{tech}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
