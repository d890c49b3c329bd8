use dioxus::prelude::*;

use crate::components::ContactPanel;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "contact",
            h1 { class: "section-title", "Get In Touch" }
            ContactPanel {}
        }
    }
}
