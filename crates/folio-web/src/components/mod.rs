//! Reusable components shared across pages.

mod contact_panel;
mod github_projects;
mod particles;
mod scroll_indicator;
mod shell;
mod skill_tree;
mod skills_sphere;
mod timeline;

pub use contact_panel::ContactPanel;
pub use github_projects::{GithubProjects, RepoCard};
pub use particles::ParticleBackground;
pub use scroll_indicator::ScrollIndicator;
pub use shell::Shell;
pub use skill_tree::SkillTreeView;
pub use skills_sphere::SkillsSphere;
pub use timeline::JourneyTimeline;
