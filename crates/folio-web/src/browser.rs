//! Thin helpers over `web_sys` for the bits of the DOM Dioxus does not
//! expose: viewport size, local time, root classes, element geometry and
//! animation frames.

use chrono::{Local, Timelike};
use folio_core::SectionBounds;
use js_sys::Promise;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Id of the element that scrolls the whole site.
pub const SCROLL_ROOT_ID: &str = "scroll-root";

/// Inner size of the browser window, `(0, 0)` outside a browser.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Hour of day in the visitor's time zone.
pub fn local_hour() -> u32 {
    Local::now().hour()
}

/// Small RNG seeded from `Math.random`.
pub fn seeded_rng() -> SmallRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    SmallRng::seed_from_u64(seed)
}

/// Replace any `theme-*` class on `<html>` with `class`.
pub fn set_root_theme_class(class: &str, all: &[&str]) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        tracing::warn!("No document root to apply theme to");
        return;
    };

    let classes = root.class_list();
    for stale in all {
        if let Err(e) = classes.remove_1(stale) {
            tracing::warn!(?e, class = stale, "Failed to clear theme class");
        }
    }
    if let Err(e) = classes.add_1(class) {
        tracing::warn!(?e, class, "Failed to apply theme class");
    }
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Scroll position of a scrolling element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub top: f64,
    pub height: f64,
    pub client_height: f64,
}

pub fn scroll_metrics(id: &str) -> Option<ScrollMetrics> {
    let element = element_by_id(id)?;
    Some(ScrollMetrics {
        top: f64::from(element.scroll_top()),
        height: f64::from(element.scroll_height()),
        client_height: f64::from(element.client_height()),
    })
}

/// Bounds of element `id` in the content coordinates of the scrolling
/// element `container_id`, the same frame as its `scrollTop`.
pub fn section_bounds(id: &str, container_id: &str) -> Option<SectionBounds> {
    let section = element_by_id(id)?.get_bounding_client_rect();
    let container = element_by_id(container_id)?;
    let scroll_top = f64::from(container.scroll_top());
    let container_top = container.get_bounding_client_rect().top();
    Some(SectionBounds::from_client_rects(
        section.top(),
        section.height(),
        container_top,
        scroll_top,
    ))
}

pub fn scroll_into_view(id: &str) {
    let Some(element) = element_by_id(id) else {
        tracing::debug!(id, "Scroll target missing");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Navigate the window to `url` (used for `mailto:` links).
pub fn open_url(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        tracing::warn!(?e, "Failed to open link");
    }
}

/// Resolves on the next animation frame with its timestamp.
///
/// Returns `None` outside a browser or if the frame request fails. Loops
/// built on this stop when the owning component's task is dropped.
pub async fn next_frame() -> Option<f64> {
    let window = web_sys::window()?;
    let mut requested = true;
    let promise = Promise::new(&mut |resolve, _reject| {
        requested = window.request_animation_frame(&resolve).is_ok();
    });
    if !requested {
        return None;
    }
    JsFuture::from(promise).await.ok()?.as_f64()
}
