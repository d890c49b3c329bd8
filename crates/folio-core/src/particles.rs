//! Drifting particle field behind every page.
//!
//! The field is plain data stepped once per animation frame. Drawing is left
//! to the caller: each tick it paints [`ParticleField::particles`] as dots and
//! [`ParticleField::links`] as thin lines.

use std::fmt;

use rand::Rng;

use crate::config::ParticleConfig;
use crate::theme::AppliedTheme;

/// An RGBA color as understood by canvas `fillStyle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Rgba {
    /// A random color from the palette of `theme`.
    pub fn random_for<R: Rng + ?Sized>(theme: AppliedTheme, rng: &mut R) -> Self {
        match theme {
            AppliedTheme::Dark => Self {
                r: rng.random_range(150..250),
                g: rng.random_range(150..250),
                b: rng.random_range(0..255),
                a: 0.7,
            },
            AppliedTheme::Neon => {
                let mut channel = || if rng.random_bool(0.7) { 255 } else { 0 };
                Self {
                    r: channel(),
                    g: channel(),
                    b: channel(),
                    a: 0.8,
                }
            }
            AppliedTheme::Retro => Self {
                r: rng.random_range(150..250),
                g: rng.random_range(100..150),
                b: rng.random_range(0..50),
                a: 0.7,
            },
            AppliedTheme::Light | AppliedTheme::Minimalist => Self {
                r: rng.random_range(0..100),
                g: rng.random_range(0..100),
                b: rng.random_range(55..255),
                a: 0.3,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: Rgba,
}

/// All particles of one canvas.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    theme: AppliedTheme,
    config: ParticleConfig,
    particles: Vec<Particle>,
    pointer: Option<(f64, f64)>,
}

impl ParticleField {
    /// Seed a field for a `width` x `height` canvas.
    pub fn new<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        theme: AppliedTheme,
        config: ParticleConfig,
        rng: &mut R,
    ) -> Self {
        let mut field = Self {
            width,
            height,
            theme,
            config,
            particles: Vec::new(),
            pointer: None,
        };
        field.reseed(rng);
        field
    }

    /// Number of particles for a canvas of this size.
    pub fn count_for(width: f64, height: f64, config: &ParticleConfig) -> usize {
        if width <= 0.0 || height <= 0.0 {
            return 0;
        }
        let count = (width * height / config.area_per_particle).floor() as usize;
        count.min(config.max_particles)
    }

    fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = Self::count_for(self.width, self.height, &self.config);
        self.particles = (0..count)
            .map(|_| {
                let size = rng.random_range(1.0..6.0);
                Particle {
                    x: rng.random::<f64>() * (self.width - size * 2.0).max(0.0),
                    y: rng.random::<f64>() * (self.height - size * 2.0).max(0.0),
                    size,
                    vx: rng.random_range(-1.0..1.0) * 0.5,
                    vy: rng.random_range(-1.0..1.0) * 0.2,
                    color: Rgba::random_for(self.theme, rng),
                }
            })
            .collect();
        tracing::debug!(
            count,
            width = self.width,
            height = self.height,
            "Seeded particle field"
        );
    }

    /// Canvas was resized: start over at the new size.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.reseed(rng);
    }

    /// Theme changed: start over with the new palette.
    pub fn set_theme<R: Rng + ?Sized>(&mut self, theme: AppliedTheme, rng: &mut R) {
        if self.theme != theme {
            self.theme = theme;
            self.reseed(rng);
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn theme(&self) -> AppliedTheme {
        self.theme
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let radius = self.config.pointer_radius;
        let strength = self.config.pointer_force;

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x > width || p.x < 0.0 {
                p.vx = -p.vx;
            }
            if p.y > height || p.y < 0.0 {
                p.vy = -p.vy;
            }

            let Some((px, py)) = self.pointer else {
                continue;
            };
            let dx = px - p.x;
            let dy = py - p.y;
            let distance = dx.hypot(dy);
            if distance < radius {
                let force = (radius - distance) / radius;
                let (ux, uy) = if distance > 0.0 {
                    (dx / distance, dy / distance)
                } else {
                    (0.0, 0.0)
                };
                p.vx -= ux * force * strength;
                p.vy -= uy * force * strength;
            }
        }
    }

    /// Index pairs `(i, j)`, `i < j`, closer than the link distance.
    pub fn links(&self) -> Vec<(usize, usize)> {
        let max = self.config.link_distance;
        let mut pairs = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                if (a.x - b.x).hypot(a.y - b.y) < max {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}
