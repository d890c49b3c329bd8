//! Static portfolio content.
//!
//! Biography, stats, skills, milestones, contact details and blog summaries
//! are kept in an embedded TOML document so the pages stay pure markup.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::skills::Skill;

/// Content document embedded at compile time.
const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.toml");

/// Everything the pages render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    /// About page paragraphs, in order.
    #[serde(default)]
    pub about: Vec<String>,
}

/// A headline number on the about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// A career step on the journey timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub pitch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// A blog entry summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub published: NaiveDate,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn published_label(&self) -> String {
        self.published.format("%b %-d, %Y").to_string()
    }
}

impl SiteContent {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let content: SiteContent = toml::from_str(source).map_err(|e| ConfigError::Parse {
            source_name: "portfolio content",
            message: e.to_string(),
        })?;
        content.validate()?;
        Ok(content)
    }

    /// The content shipped with the site.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for skill in &self.skills {
            if !(1..=10).contains(&skill.level) {
                return Err(ConfigError::Invalid {
                    field: "skills.level",
                    reason: format!("{} has level {}, expected 1..=10", skill.name, skill.level),
                });
            }
            if !seen.insert(skill.name.as_str()) {
                return Err(ConfigError::Invalid {
                    field: "skills.name",
                    reason: format!("duplicate skill {}", skill.name),
                });
            }
        }
        if !self.contact.email.contains('@') {
            return Err(ConfigError::Invalid {
                field: "contact.email",
                reason: format!("{} is not an email address", self.contact.email),
            });
        }
        Ok(())
    }

    /// Milestones newest first.
    pub fn timeline(&self) -> Vec<&Milestone> {
        let mut milestones: Vec<&Milestone> = self.milestones.iter().collect();
        milestones.sort_by(|a, b| b.year.cmp(&a.year));
        milestones
    }

    /// Blog posts newest first.
    pub fn recent_posts(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [profile]
        name = "Test Person"
        role = "Engineer"
        tagline = "Builds things"

        [contact]
        email = "me@example.com"
        pitch = "Say hi"
    "#;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();
        assert!(!content.profile.name.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.milestones.is_empty());
    }

    #[test]
    fn test_optional_sections_default_empty() {
        let content = SiteContent::from_toml_str(MINIMAL).unwrap();
        assert!(content.skills.is_empty());
        assert!(content.posts.is_empty());
        assert_eq!(content.contact.phone, None);
    }

    #[test]
    fn test_rejects_out_of_range_level() {
        let doc = format!(
            "{MINIMAL}\n[[skills]]\nname = \"Rust\"\ncategory = \"Languages\"\nlevel = 11\n"
        );
        let err = SiteContent::from_toml_str(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "skills.level", .. }));
    }

    #[test]
    fn test_rejects_duplicate_skill() {
        let doc = format!(
            "{MINIMAL}\n[[skills]]\nname = \"Rust\"\ncategory = \"Languages\"\nlevel = 5\n\
             [[skills]]\nname = \"Rust\"\ncategory = \"Backend\"\nlevel = 6\n"
        );
        assert!(SiteContent::from_toml_str(&doc).is_err());
    }

    #[test]
    fn test_timeline_is_newest_first() {
        let content = SiteContent::embedded().unwrap();
        let years: Vec<i32> = content.timeline().iter().map(|m| m.year).collect();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_post_date_label() {
        let post = BlogPost {
            slug: "x".into(),
            title: "X".into(),
            published: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            summary: String::new(),
            tags: vec![],
        };
        assert_eq!(post.published_label(), "Mar 7, 2024");
    }
}
