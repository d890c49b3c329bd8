//! Site-wide configuration and content, shared through context.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{FolioResult, SiteConfig, SiteContent};

/// Configuration plus content, loaded once at start-up.
#[derive(Clone)]
pub struct Site {
    pub config: Rc<SiteConfig>,
    pub content: Rc<SiteContent>,
}

impl Site {
    /// Load the embedded documents. Bad configuration falls back to
    /// defaults; content has no sensible default and is reported.
    pub fn load() -> FolioResult<Self> {
        let config = SiteConfig::embedded_or_default();
        let content = SiteContent::embedded()?;
        tracing::info!(
            skills = content.skills.len(),
            milestones = content.milestones.len(),
            posts = content.posts.len(),
            "Loaded site content"
        );
        Ok(Self {
            config: Rc::new(config),
            content: Rc::new(content),
        })
    }
}

/// Equality is by pointer identity so `Site` can be a component prop.
impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.content, &other.content)
    }
}

/// The site provided by the root component.
pub fn use_site() -> Site {
    use_context::<Site>()
}
