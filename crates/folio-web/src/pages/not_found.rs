use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(%path, "No route matched");

    rsx! {
        section { class: "not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back home" }
        }
    }
}
