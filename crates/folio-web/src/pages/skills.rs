use dioxus::prelude::*;

use crate::components::{SkillTreeView, SkillsSphere};

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { class: "skills",
            h1 { class: "section-title", "Skills" }
            SkillsSphere {}
            h2 { class: "section-subtitle", "Skill Tree" }
            SkillTreeView {}
        }
    }
}
