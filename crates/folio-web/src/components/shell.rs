//! Shared page chrome: header with navigation and theme switcher, footer.

use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::routes::{Route, nav_links};
use crate::site::use_site;
use crate::theme::ThemeSwitcher;

use super::ScrollIndicator;

/// Layout wrapping every route.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "shell",
            ScrollIndicator {}
            Header {}
            main { class: "page",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    let site = use_site();
    let name = site.content.profile.name.clone();

    rsx! {
        header { class: "site-header",
            Link { class: "brand", to: Route::Home {}, "{name}" }
            Navbar {}
            ThemeSwitcher {}
        }
    }
}

/// Navigation links, collapsed behind a toggle on narrow screens.
#[component]
fn Navbar() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        nav { class: "navbar",
            button {
                class: "nav-toggle",
                "aria-label": "Toggle navigation",
                "aria-expanded": "{open}",
                onclick: move |_| open.toggle(),
                span { class: "bar" }
                span { class: "bar" }
                span { class: "bar" }
            }
            ul { class: if open() { "nav-links open" } else { "nav-links" },
                for (route, title) in nav_links() {
                    li {
                        Link {
                            class: "nav-link",
                            active_class: "active",
                            to: route,
                            onclick: move |_| open.set(false),
                            "{title}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let site = use_site();
    let year = Local::now().year();
    let name = site.content.profile.name.clone();
    let socials = site.content.socials.clone();

    rsx! {
        footer { class: "site-footer",
            p { "© {year} {name}" }
            ul { class: "social-links",
                for social in socials {
                    li {
                        a {
                            href: "{social.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{social.label}"
                        }
                    }
                }
            }
        }
    }
}
