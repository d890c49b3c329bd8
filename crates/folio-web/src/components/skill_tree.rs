//! Zoomable tree of skills grouped by category.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{SkillTree, TreeNodeKind, Zoom};

use crate::site::use_site;

const TREE_WIDTH: f64 = 900.0;
const TREE_HEIGHT: f64 = 420.0;

struct NodeView {
    class: &'static str,
    label: String,
    skill: Option<(usize, usize)>,
    cx: String,
    cy: String,
    r: String,
    label_y: String,
}

fn node_class(kind: TreeNodeKind) -> &'static str {
    match kind {
        TreeNodeKind::Root => "tree-node root",
        TreeNodeKind::Category => "tree-node category",
        TreeNodeKind::Skill => "tree-node skill",
    }
}

#[component]
pub fn SkillTreeView() -> Element {
    let site = use_site();
    let tree = use_hook(|| Rc::new(SkillTree::from_skills(&site.content.skills)));
    let layout = use_hook(|| Rc::new(tree.layout(TREE_WIDTH, TREE_HEIGHT)));

    let mut zoom = use_signal(Zoom::default);
    let mut selected = use_signal(|| None::<(usize, usize)>);

    let scale = zoom().value();
    let transform = format!("scale({scale})");
    let zoom_label = format!("{:.0}%", scale * 100.0);

    let edges: Vec<(String, String, String, String)> = layout
        .links
        .iter()
        .map(|&(from, to)| {
            let (a, b) = (&layout.nodes[from], &layout.nodes[to]);
            (
                format!("{:.1}", a.x),
                format!("{:.1}", a.y),
                format!("{:.1}", b.x),
                format!("{:.1}", b.y),
            )
        })
        .collect();

    let nodes: Vec<NodeView> = layout
        .nodes
        .iter()
        .map(|node| NodeView {
            class: node_class(node.kind),
            label: node.label.clone(),
            skill: node.skill,
            cx: format!("{:.1}", node.x),
            cy: format!("{:.1}", node.y),
            r: format!("{:.1}", node.radius),
            label_y: format!("{:.1}", node.y + node.radius + 14.0),
        })
        .collect();

    let details = selected()
        .and_then(|(ci, si)| tree.skill(ci, si).cloned())
        .map(|skill| {
            let percent = skill.proficiency_percent();
            (skill, percent)
        });

    rsx! {
        div { class: "skill-tree",
            div { class: "tree-controls",
                button {
                    class: "btn btn-icon",
                    "aria-label": "Zoom out",
                    disabled: scale <= Zoom::MIN,
                    onclick: move |_| zoom.set(zoom().zoom_out()),
                    "−"
                }
                span { class: "zoom-level", "{zoom_label}" }
                button {
                    class: "btn btn-icon",
                    "aria-label": "Zoom in",
                    disabled: scale >= Zoom::MAX,
                    onclick: move |_| zoom.set(zoom().zoom_in()),
                    "+"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| zoom.set(Zoom::reset()),
                    "Reset"
                }
            }

            div { class: "tree-viewport",
                svg {
                    view_box: "0 0 {TREE_WIDTH} {TREE_HEIGHT}",
                    style: "transform: {transform}; transform-origin: top center;",
                    for (x1, y1, x2, y2) in edges {
                        line { class: "tree-link", x1, y1, x2, y2 }
                    }
                    for node in nodes {
                        g {
                            class: node.class,
                            onclick: move |_| {
                                if let Some(position) = node.skill {
                                    selected.set(Some(position));
                                }
                            },
                            circle { cx: "{node.cx}", cy: "{node.cy}", r: "{node.r}" }
                            text {
                                x: "{node.cx}",
                                y: "{node.label_y}",
                                text_anchor: "middle",
                                "{node.label}"
                            }
                        }
                    }
                }
            }

            if let Some((skill, percent)) = details {
                aside { class: "skill-details",
                    button {
                        class: "close",
                        "aria-label": "Close details",
                        onclick: move |_| selected.set(None),
                        "×"
                    }
                    h3 { "{skill.name}" }
                    p { class: "skill-category", "{skill.category}" }
                    div { class: "proficiency",
                        div {
                            class: "proficiency-bar",
                            style: "width: {percent}%",
                        }
                    }
                    if let Some(years) = skill.years {
                        p { class: "skill-years", "{years} years of experience" }
                    }
                    if let Some(description) = &skill.description {
                        p { "{description}" }
                    }
                }
            }
        }
    }
}
