//! Single-page variant: every section stacked, with side indicators and
//! sections revealed as they reach the middle of the viewport.

use dioxus::prelude::*;
use folio_core::{Section, SectionBounds, active_section};

use crate::app::use_scroll;
use crate::browser::{self, SCROLL_ROOT_ID};
use crate::components::{ContactPanel, GithubProjects, JourneyTimeline, SkillsSphere};
use crate::site::use_site;

#[component]
pub fn Journey() -> Element {
    let site = use_site();
    let mut scroll = use_scroll();

    // Initial check, before the first scroll event.
    use_effect(move || {
        if let Some(metrics) = browser::scroll_metrics(SCROLL_ROOT_ID) {
            scroll.set(metrics);
        }
    });

    let active = use_memo(move || {
        let metrics = scroll();
        let bounds: Vec<(Section, SectionBounds)> = Section::all()
            .iter()
            .filter_map(|section| {
                let bounds = browser::section_bounds(section.id(), SCROLL_ROOT_ID)?;
                Some((*section, bounds))
            })
            .collect();
        active_section(metrics.top, metrics.client_height, &bounds)
    });

    let current = active();
    let is_visible = move |section: Section| current == Some(section);
    let section_class = move |section: Section, extra: &str| {
        if is_visible(section) {
            format!("portfolio-section {extra} visible")
        } else {
            format!("portfolio-section {extra}")
        }
    };

    let profile = site.content.profile.clone();
    let stats = site.content.stats.clone();
    let featured = site.config.github.featured_limit;

    rsx! {
        div { class: "scrollable-portfolio",
            nav { class: "section-indicators",
                ul {
                    for section in Section::all().iter().copied() {
                        li { key: "{section}",
                            button {
                                class: if is_visible(section) { "active" } else { "" },
                                "aria-label": "Scroll to {section} section",
                                onclick: move |_| browser::scroll_into_view(section.id()),
                                span { class: "indicator-label", "{section}" }
                                span { class: "indicator-dot" }
                            }
                        }
                    }
                }
            }

            section { id: Section::Home.id(), class: section_class(Section::Home, "hero-section"),
                div { class: "section-content hero-content",
                    h1 { "{profile.name}" }
                    h2 { "{profile.role}" }
                    p { class: "hero-tagline", "{profile.tagline}" }
                    div { class: "hero-cta",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| browser::scroll_into_view(Section::Contact.id()),
                            "Get In Touch"
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| browser::scroll_into_view(Section::Projects.id()),
                            "View My Work"
                        }
                    }
                }
            }

            section { id: Section::About.id(), class: section_class(Section::About, "about-section"),
                div { class: "section-content",
                    h2 { class: "section-title", "About Me" }
                    div { class: "about-grid",
                        div { class: "about-text",
                            for paragraph in profile.about {
                                p { "{paragraph}" }
                            }
                        }
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
            }

            section { id: Section::Skills.id(), class: section_class(Section::Skills, "skills-section"),
                div { class: "section-content",
                    h2 { class: "section-title", "My Skills" }
                    SkillsSphere {}
                }
            }

            section { id: Section::Projects.id(), class: section_class(Section::Projects, "projects-section"),
                div { class: "section-content",
                    h2 { class: "section-title", "Featured Projects" }
                    GithubProjects { limit: featured, show_filters: false }
                }
            }

            section { id: Section::Experience.id(), class: section_class(Section::Experience, "experience-section"),
                div { class: "section-content",
                    h2 { class: "section-title", "My Journey" }
                    JourneyTimeline { revealed: is_visible(Section::Experience) }
                }
            }

            section { id: Section::Contact.id(), class: section_class(Section::Contact, "contact-section"),
                div { class: "section-content",
                    h2 { class: "section-title", "Get In Touch" }
                    ContactPanel {}
                }
            }
        }
    }
}
