//! Orbiting sphere of skills, drawn as SVG.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Orbit, SkillSphere, skill_color};

use crate::browser::next_frame;
use crate::site::use_site;

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 480.0;

/// A projected node, formatted for SVG attributes.
struct NodeView {
    index: usize,
    label: String,
    cx: String,
    cy: String,
    r: String,
    label_y: String,
    font_size: String,
    opacity: String,
}

#[component]
pub fn SkillsSphere() -> Element {
    let site = use_site();
    let sphere = use_hook(|| {
        Rc::new(SkillSphere::new(
            site.content.skills.clone(),
            site.config.sphere.clone(),
        ))
    });

    let mut orbit = use_signal(Orbit::new);
    let mut last_pointer = use_signal(|| None::<(f64, f64)>);
    let mut hovered = use_signal(|| None::<usize>);

    let config = sphere.config().clone();
    use_future(move || {
        let config = config.clone();
        async move {
            while next_frame().await.is_some() {
                orbit.write().tick(&config);
            }
        }
    });

    let drag_config = sphere.config().clone();
    let skills = sphere.skills();
    let nodes: Vec<NodeView> = sphere
        .frame(&orbit.read(), VIEW_WIDTH, VIEW_HEIGHT)
        .into_iter()
        .map(|node| NodeView {
            index: node.index,
            label: skills[node.index].name.clone(),
            cx: format!("{:.1}", node.x),
            cy: format!("{:.1}", node.y),
            r: format!("{:.1}", node.radius),
            label_y: format!("{:.1}", node.y - node.radius - 4.0),
            font_size: format!("{:.1}", 12.0 * node.scale),
            opacity: format!("{:.2}", 0.35 + 0.65 * node.scale.min(1.5) / 1.5),
        })
        .collect();

    let detail = hovered().and_then(|i| skills.get(i)).map(|skill| {
        let description = skill
            .description
            .clone()
            .unwrap_or_else(|| format!("{} · level {}/10", skill.category, skill.level));
        (skill.name.clone(), description)
    });

    let class = if orbit.read().is_dragging() {
        "skills-sphere dragging"
    } else {
        "skills-sphere"
    };

    rsx! {
        div { class: "skills-sphere-container",
            svg {
                class,
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                "role": "img",
                "aria-label": "Skills sphere",
                onmousedown: move |evt| {
                    let point = evt.client_coordinates();
                    orbit.write().begin_drag();
                    last_pointer.set(Some((point.x, point.y)));
                },
                onmousemove: move |evt| {
                    let Some((x, y)) = last_pointer() else {
                        return;
                    };
                    let point = evt.client_coordinates();
                    orbit.write().drag(point.x - x, point.y - y, &drag_config);
                    last_pointer.set(Some((point.x, point.y)));
                },
                onmouseup: move |_| {
                    orbit.write().end_drag();
                    last_pointer.set(None);
                },
                onmouseleave: move |_| {
                    orbit.write().end_drag();
                    last_pointer.set(None);
                    hovered.set(None);
                },

                for node in nodes {
                    g {
                        key: "{node.index}",
                        class: "sphere-node",
                        opacity: "{node.opacity}",
                        onmouseenter: move |_| hovered.set(Some(node.index)),
                        circle {
                            cx: "{node.cx}",
                            cy: "{node.cy}",
                            r: "{node.r}",
                            fill: skill_color(node.index),
                        }
                        text {
                            x: "{node.cx}",
                            y: "{node.label_y}",
                            text_anchor: "middle",
                            font_size: "{node.font_size}",
                            "{node.label}"
                        }
                    }
                }
            }
            div { class: "sphere-detail",
                if let Some((name, description)) = detail {
                    h4 { "{name}" }
                    p { "{description}" }
                } else {
                    p { class: "hint", "Drag to rotate. Hover a skill for details." }
                }
            }
        }
    }
}
