//! Reading-progress bar pinned to the top of the page.

use dioxus::prelude::*;
use folio_core::scroll_progress;

use crate::app::use_scroll;

#[component]
pub fn ScrollIndicator() -> Element {
    let scroll = use_scroll();
    let metrics = scroll();
    let percent = scroll_progress(metrics.top, metrics.height, metrics.client_height);
    let width = format!("width: {percent:.2}%");

    rsx! {
        div { class: "scroll-indicator",
            div {
                class: "scroll-indicator-progress",
                style: width,
            }
        }
    }
}
