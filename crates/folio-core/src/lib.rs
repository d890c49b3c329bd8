//! Core domain logic for the folio portfolio site.
//!
//! Everything here is platform independent and tested on the host; the
//! `folio-web` crate wires it to the browser.
//!
//! ## Modules
//!
//! - [`theme`]: theme modes, time-of-day resolution, persisted preference
//! - [`storage`]: the [`PreferenceStore`] seam over local storage
//! - [`github`]: repository gallery model, selection and filters
//! - [`particles`]: the drifting particle background
//! - [`skills`]: skills sphere, skill tree and zoom
//! - [`scroll`]: section tracking and scroll progress
//! - [`contact`]: contact form validation
//! - [`config`] / [`content`]: embedded site configuration and content

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod github;
pub mod particles;
pub mod scroll;
pub mod skills;
pub mod storage;
pub mod theme;

pub use config::{GithubConfig, ParticleConfig, SiteConfig, SphereConfig, ThemeConfig};
pub use contact::{ContactForm, ContactSubmission};
pub use content::{BlogPost, ContactInfo, Milestone, Profile, SiteContent, SocialLink, Stat};
pub use error::{
    ConfigError, ContactError, FetchError, FolioError, FolioResult, StorageError, ThemeError,
};
pub use github::{
    RepoFilter, RepoQuery, RepoSource, Repository, apply_filter, filter_options, load_gallery,
    parse_repositories, select_repositories,
};
pub use particles::{Particle, ParticleField, Rgba};
pub use scroll::{Section, SectionBounds, active_section, scroll_progress};
pub use skills::{
    Orbit, ProjectedSkill, Skill, SkillSphere, SkillTree, TreeLayout, TreeNodeKind, Zoom,
    skill_color,
};
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::{AppliedTheme, Daylight, ThemeMode, load_preference, save_preference};
