//! Root application component.

use dioxus::prelude::*;

use crate::browser::{self, SCROLL_ROOT_ID, ScrollMetrics};
use crate::components::ParticleBackground;
use crate::routes::Route;
use crate::site::Site;
use crate::theme::ThemeProvider;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Scroll position of the site's scroll root, updated on every scroll.
pub fn use_scroll() -> Signal<ScrollMetrics> {
    use_context::<Signal<ScrollMetrics>>()
}

/// Root application component.
#[component]
pub fn App() -> Element {
    let site = use_hook(|| {
        Site::load().map_err(|e| {
            tracing::error!(error = %e, "Failed to load site content");
            e.to_string()
        })
    });

    match site {
        Ok(site) => rsx! {
            SiteRoot { site }
        },
        Err(message) => rsx! {
            style { "{STYLES_CSS}" }
            div { class: "fatal",
                h1 { "This site failed to load" }
                p { "{message}" }
            }
        },
    }
}

/// Provides site, theme and scroll context, then hands over to the router.
#[component]
fn SiteRoot(site: Site) -> Element {
    let site = use_context_provider(|| site);
    let mut scroll = use_context_provider(|| Signal::new(ScrollMetrics::default()));
    let mut pointer = use_signal(|| None::<(f64, f64)>);

    let title = format!("{} | {}", site.content.profile.name, site.content.profile.role);

    rsx! {
        document::Title { "{title}" }
        style { "{STYLES_CSS}" }

        ThemeProvider {
            ParticleBackground { pointer }

            div {
                id: SCROLL_ROOT_ID,
                class: "scroll-root",
                onmousemove: move |evt| {
                    let point = evt.client_coordinates();
                    pointer.set(Some((point.x, point.y)));
                },
                onmouseleave: move |_| pointer.set(None),
                onscroll: move |_| {
                    if let Some(metrics) = browser::scroll_metrics(SCROLL_ROOT_ID) {
                        scroll.set(metrics);
                    }
                },

                Router::<Route> {}
            }
        }
    }
}
