//! Full-viewport canvas of drifting particles.
//!
//! The canvas ignores pointer events; the pointer position is tracked by the
//! scroll root and passed in. The draw loop lives in a component task, so it
//! stops when the component unmounts.

use std::f64::consts::TAU;

use dioxus::prelude::*;
use folio_core::ParticleField;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::browser::{self, next_frame};
use crate::site::use_site;
use crate::theme::use_theme;

const CANVAS_ID: &str = "particle-canvas";

/// Frames to wait for the canvas to mount before giving up.
const MOUNT_FRAMES: usize = 60;

/// Canvas plus its 2D context.
struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    fn acquire(id: &str) -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or("canvas not mounted")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "element is not a canvas")?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "unexpected context type")?;
        Ok(Self { canvas, ctx })
    }

    fn resize(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn draw(&self, field: &ParticleField) {
        let (width, height) = field.size();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width, height);

        let particles = field.particles();
        for p in particles {
            ctx.begin_path();
            if ctx.arc(p.x, p.y, p.size, 0.0, TAU).is_err() {
                continue;
            }
            ctx.set_fill_style_str(&p.color.to_string());
            ctx.fill();
        }

        ctx.set_line_width(0.2);
        for (i, j) in field.links() {
            let (a, b) = (&particles[i], &particles[j]);
            ctx.begin_path();
            ctx.set_stroke_style_str(&a.color.to_string());
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.stroke();
        }
    }
}

async fn wait_for_surface() -> Option<Surface> {
    let mut last_error = String::new();
    for _ in 0..MOUNT_FRAMES {
        match Surface::acquire(CANVAS_ID) {
            Ok(surface) => return Some(surface),
            Err(e) => last_error = e,
        }
        next_frame().await?;
    }
    tracing::warn!(error = %last_error, "Particle background disabled");
    None
}

#[component]
pub fn ParticleBackground(pointer: ReadSignal<Option<(f64, f64)>>) -> Element {
    let site = use_site();
    let theme = use_theme();
    let config = site.config.particles.clone();

    use_future(move || {
        let config = config.clone();
        async move {
            let Some(surface) = wait_for_surface().await else {
                return;
            };

            let mut rng = browser::seeded_rng();
            let (width, height) = browser::viewport_size();
            surface.resize(width, height);
            let mut field =
                ParticleField::new(width, height, *theme.applied.peek(), config, &mut rng);
            tracing::info!(particles = field.particles().len(), "Particle background started");

            while next_frame().await.is_some() {
                let size = browser::viewport_size();
                if size != field.size() {
                    surface.resize(size.0, size.1);
                    field.resize(size.0, size.1, &mut rng);
                }
                field.set_theme(*theme.applied.peek(), &mut rng);

                match *pointer.peek() {
                    Some((x, y)) => field.set_pointer(x, y),
                    None => field.clear_pointer(),
                }

                field.step();
                surface.draw(&field);
            }
        }
    });

    rsx! {
        canvas {
            id: CANVAS_ID,
            class: "particle-canvas",
            "aria-hidden": "true",
        }
    }
}
