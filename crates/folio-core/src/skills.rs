//! Skills model and the two skills visualisations.
//!
//! - [`SkillSphere`]: skills spread over a sphere that slowly spins and can
//!   be orbited by dragging. Every frame is projected with a perspective
//!   camera and returned back-to-front so later nodes paint over earlier
//!   ones.
//! - [`SkillTree`]: skills grouped by category under a single root, laid out
//!   top-down.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::SphereConfig;

/// A single skill entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    /// Proficiency, 1 to 10.
    pub level: u8,
    #[serde(default)]
    pub years: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Skill {
    /// Width of the proficiency bar, in percent.
    pub fn proficiency_percent(&self) -> u32 {
        u32::from(self.level.min(10)) * 10
    }
}

/// Hue assigned to the skill at `index`.
pub fn skill_hue(index: usize) -> u32 {
    ((index * 30) % 360) as u32
}

/// CSS fill color for the skill at `index`.
pub fn skill_color(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", skill_hue(index))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }
}

/// `count` evenly spread points on a sphere of `radius` (Fibonacci lattice).
pub fn fibonacci_sphere(count: usize, radius: f64) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / count as f64;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f64;
            Vec3 {
                x: theta.cos() * ring * radius,
                y: y * radius,
                z: theta.sin() * ring * radius,
            }
        })
        .collect()
}

/// Pitch limit so the sphere never flips over.
const MAX_PITCH: f64 = 1.4;

/// Camera orbit state, driven by drag gestures and decayed each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orbit {
    pub yaw: f64,
    pub pitch: f64,
    velocity_yaw: f64,
    velocity_pitch: f64,
    dragging: bool,
}

impl Orbit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.velocity_yaw = 0.0;
        self.velocity_pitch = 0.0;
    }

    /// Pointer moved by `(dx, dy)` pixels while dragging.
    pub fn drag(&mut self, dx: f64, dy: f64, config: &SphereConfig) {
        if !self.dragging {
            return;
        }
        self.velocity_yaw = dx * config.drag_sensitivity;
        self.velocity_pitch = dy * config.drag_sensitivity;
        self.yaw += self.velocity_yaw;
        self.pitch = (self.pitch + self.velocity_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Release keeps the last drag velocity so the sphere coasts.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Advance one frame: coast with damping, then auto-rotate.
    pub fn tick(&mut self, config: &SphereConfig) {
        if self.dragging {
            return;
        }
        self.yaw += self.velocity_yaw + config.auto_rotate;
        self.pitch = (self.pitch + self.velocity_pitch).clamp(-MAX_PITCH, MAX_PITCH);

        let keep = 1.0 - config.damping;
        self.velocity_yaw *= keep;
        self.velocity_pitch *= keep;
    }

    pub fn speed(&self) -> f64 {
        self.velocity_yaw.hypot(self.velocity_pitch)
    }

    fn apply(&self, point: Vec3) -> Vec3 {
        point.rotate_y(self.yaw).rotate_x(self.pitch)
    }
}

/// One skill as seen from the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedSkill {
    /// Index into the skill list.
    pub index: usize,
    /// Screen position, pixels from the top-left of the viewport.
    pub x: f64,
    pub y: f64,
    /// Node radius on screen.
    pub radius: f64,
    /// Distance from the camera along its view axis.
    pub depth: f64,
    /// Perspective scale, 1.0 on the plane through the sphere centre.
    pub scale: f64,
}

/// Skills placed on a sphere.
#[derive(Debug, Clone)]
pub struct SkillSphere {
    skills: Vec<Skill>,
    positions: Vec<Vec3>,
    config: SphereConfig,
}

impl SkillSphere {
    pub fn new(skills: Vec<Skill>, config: SphereConfig) -> Self {
        let positions = fibonacci_sphere(skills.len(), config.radius);
        Self {
            skills,
            positions,
            config,
        }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    /// Scene-space node radius for a proficiency level.
    pub fn node_radius(level: u8) -> f64 {
        0.3 + 0.1 * f64::from(level.min(10))
    }

    /// Project every skill for a `width` x `height` viewport, farthest first.
    pub fn frame(&self, orbit: &Orbit, width: f64, height: f64) -> Vec<ProjectedSkill> {
        let camera = self.config.camera_distance;
        // Sphere diameter fills ~80% of the shorter side at scale 1.
        let unit = 0.4 * width.min(height) / self.config.radius;
        let (cx, cy) = (width / 2.0, height / 2.0);

        let mut projected: Vec<ProjectedSkill> = self
            .positions
            .iter()
            .zip(&self.skills)
            .enumerate()
            .map(|(index, (position, skill))| {
                let p = orbit.apply(*position);
                let depth = camera - p.z;
                let scale = camera / depth;
                ProjectedSkill {
                    index,
                    x: cx + p.x * scale * unit,
                    y: cy - p.y * scale * unit,
                    radius: Self::node_radius(skill.level) * scale * unit,
                    depth,
                    scale,
                }
            })
            .collect();

        projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        projected
    }
}

/// A category and its skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// Skills grouped by category, categories in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillTree {
    pub categories: Vec<SkillCategory>,
}

/// Kind of node in a laid-out tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeNodeKind {
    Root,
    Category,
    Skill,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub label: String,
    pub kind: TreeNodeKind,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// `(category, skill)` indices for skill nodes.
    pub skill: Option<(usize, usize)>,
}

/// Node positions plus parent/child index pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    pub nodes: Vec<TreeNode>,
    pub links: Vec<(usize, usize)>,
}

impl SkillTree {
    pub fn from_skills(skills: &[Skill]) -> Self {
        let mut categories: Vec<SkillCategory> = Vec::new();
        for skill in skills {
            match categories.iter_mut().find(|c| c.name == skill.category) {
                Some(category) => category.skills.push(skill.clone()),
                None => categories.push(SkillCategory {
                    name: skill.category.clone(),
                    skills: vec![skill.clone()],
                }),
            }
        }
        Self { categories }
    }

    pub fn skill(&self, category: usize, skill: usize) -> Option<&Skill> {
        self.categories.get(category)?.skills.get(skill)
    }

    pub fn leaf_count(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    /// Top-down layout: leaves spread evenly across `width`, each category
    /// centred over its leaves, root centred over the categories.
    pub fn layout(&self, width: f64, height: f64) -> TreeLayout {
        let leaves = self.leaf_count().max(1) as f64;
        let slot = width / leaves;
        let levels = [height * 0.1, height * 0.45, height * 0.85];

        let mut nodes = vec![TreeNode {
            label: "Skills".to_string(),
            kind: TreeNodeKind::Root,
            x: width / 2.0,
            y: levels[0],
            radius: 10.0,
            skill: None,
        }];
        let mut links = Vec::new();
        let mut leaf = 0usize;
        let mut category_xs = Vec::new();

        for (ci, category) in self.categories.iter().enumerate() {
            let category_index = nodes.len();
            nodes.push(TreeNode {
                label: category.name.clone(),
                kind: TreeNodeKind::Category,
                x: 0.0,
                y: levels[1],
                radius: 10.0,
                skill: None,
            });
            links.push((0, category_index));

            let first = leaf;
            for (si, skill) in category.skills.iter().enumerate() {
                let index = nodes.len();
                nodes.push(TreeNode {
                    label: skill.name.clone(),
                    kind: TreeNodeKind::Skill,
                    x: slot * (leaf as f64 + 0.5),
                    y: levels[2],
                    radius: f64::from(skill.level) * 1.5,
                    skill: Some((ci, si)),
                });
                links.push((category_index, index));
                leaf += 1;
            }

            let middle = (first + leaf) as f64 / 2.0;
            nodes[category_index].x = slot * middle;
            category_xs.push(nodes[category_index].x);
        }

        if let (Some(first), Some(last)) = (category_xs.first(), category_xs.last()) {
            nodes[0].x = (first + last) / 2.0;
        }

        TreeLayout { nodes, links }
    }
}

/// Zoom factor for the tree view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f64);

impl Zoom {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 2.0;
    pub const STEP: f64 = 0.1;

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        Self::clamped(self.0 + Self::STEP)
    }

    pub fn zoom_out(self) -> Self {
        Self::clamped(self.0 - Self::STEP)
    }

    pub fn reset() -> Self {
        Self(1.0)
    }

    fn clamped(value: f64) -> Self {
        // Round to one decimal so repeated steps land on exact tenths.
        let rounded = (value * 10.0).round() / 10.0;
        Self(rounded.clamp(Self::MIN, Self::MAX))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str, level: u8) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.to_string(),
            level,
            years: None,
            description: None,
        }
    }

    #[test]
    fn test_fibonacci_points_lie_on_sphere() {
        for point in fibonacci_sphere(25, 10.0) {
            assert!((point.length() - 10.0).abs() < 1e-9);
        }
        assert!(fibonacci_sphere(0, 10.0).is_empty());
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(skill_hue(0), 0);
        assert_eq!(skill_hue(5), 150);
        assert_eq!(skill_hue(12), 0);
        assert_eq!(skill_color(1), "hsl(30, 70%, 50%)");
    }

    #[test]
    fn test_frame_is_back_to_front() {
        let skills = (0..12).map(|i| skill(&format!("s{i}"), "c", 5)).collect();
        let sphere = SkillSphere::new(skills, SphereConfig::default());
        let frame = sphere.frame(&Orbit::new(), 800.0, 600.0);

        assert_eq!(frame.len(), 12);
        for pair in frame.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
            // Farther nodes are drawn smaller.
            assert!(pair[0].scale <= pair[1].scale);
        }
    }

    #[test]
    fn test_orbit_coasts_and_decays() {
        let config = SphereConfig::default();
        let mut orbit = Orbit::new();
        orbit.begin_drag();
        orbit.drag(40.0, 0.0, &config);
        orbit.end_drag();

        let initial = orbit.speed();
        assert!(initial > 0.0);
        for _ in 0..50 {
            orbit.tick(&config);
        }
        assert!(orbit.speed() < initial * 0.05);
    }

    #[test]
    fn test_drag_ignored_without_begin() {
        let config = SphereConfig::default();
        let mut orbit = Orbit::new();
        orbit.drag(100.0, 100.0, &config);
        assert_eq!(orbit, Orbit::new());
    }

    #[test]
    fn test_pitch_is_clamped() {
        let config = SphereConfig::default();
        let mut orbit = Orbit::new();
        orbit.begin_drag();
        for _ in 0..100 {
            orbit.drag(0.0, 100.0, &config);
        }
        assert!(orbit.pitch <= MAX_PITCH);
    }

    #[test]
    fn test_tree_groups_in_first_seen_order() {
        let skills = vec![
            skill("React", "Frontend", 9),
            skill("Rust", "Languages", 6),
            skill("CSS", "Frontend", 8),
        ];
        let tree = SkillTree::from_skills(&skills);

        let names: Vec<&str> = tree.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Frontend", "Languages"]);
        assert_eq!(tree.categories[0].skills.len(), 2);
        assert_eq!(tree.skill(1, 0).map(|s| s.name.as_str()), Some("Rust"));
        assert_eq!(tree.skill(3, 0), None);
    }

    #[test]
    fn test_tree_layout_links_every_node() {
        let skills = vec![
            skill("React", "Frontend", 9),
            skill("CSS", "Frontend", 8),
            skill("Rust", "Languages", 6),
        ];
        let layout = SkillTree::from_skills(&skills).layout(800.0, 600.0);

        // root + 2 categories + 3 skills
        assert_eq!(layout.nodes.len(), 6);
        assert_eq!(layout.links.len(), 5);

        let frontend = &layout.nodes[1];
        let (react, css) = (&layout.nodes[2], &layout.nodes[3]);
        assert!((frontend.x - (react.x + css.x) / 2.0).abs() < 1e-9);
        assert!(react.y > frontend.y && frontend.y > layout.nodes[0].y);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut zoom = Zoom::default();
        for _ in 0..30 {
            zoom = zoom.zoom_in();
        }
        assert_eq!(zoom.value(), Zoom::MAX);

        for _ in 0..30 {
            zoom = zoom.zoom_out();
        }
        assert_eq!(zoom.value(), Zoom::MIN);
        assert_eq!(Zoom::reset().value(), 1.0);
        assert_eq!(Zoom::reset().zoom_in().value(), 1.1);
    }

    #[test]
    fn test_proficiency_percent() {
        assert_eq!(skill("x", "y", 7).proficiency_percent(), 70);
    }
}
