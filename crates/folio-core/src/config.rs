//! Configuration types for the folio site

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::{Daylight, ThemeMode};

/// Site configuration embedded at compile time.
const EMBEDDED_CONFIG: &str = include_str!("../config/site.toml");

/// Main site configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Repository gallery settings
    pub github: GithubConfig,

    /// Theme persistence and auto-mode settings
    pub theme: ThemeConfig,

    /// Particle background tuning
    pub particles: ParticleConfig,

    /// Skills sphere tuning
    pub sphere: SphereConfig,
}

impl SiteConfig {
    /// Parse a configuration document. Missing sections keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source).map_err(|e| ConfigError::Parse {
            source_name: "site config",
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration shipped with the site.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// The embedded configuration, or defaults if it fails to load.
    pub fn embedded_or_default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Falling back to default site config");
            Self::default()
        })
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github.username.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "github.username",
                reason: "must not be empty".to_string(),
            });
        }
        if self.github.gallery_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "github.gallery_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.theme.storage_key.is_empty() {
            return Err(ConfigError::Invalid {
                field: "theme.storage_key",
                reason: "must not be empty".to_string(),
            });
        }
        let daylight = self.theme.daylight;
        if daylight.start_hour >= daylight.end_hour || daylight.end_hour > 24 {
            return Err(ConfigError::Invalid {
                field: "theme.daylight",
                reason: format!(
                    "expected start < end <= 24, got {}..{}",
                    daylight.start_hour, daylight.end_hour
                ),
            });
        }
        if self.particles.area_per_particle <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "particles.area_per_particle",
                reason: "must be positive".to_string(),
            });
        }
        if !(0.0..1.0).contains(&self.sphere.damping) {
            return Err(ConfigError::Invalid {
                field: "sphere.damping",
                reason: "must be in [0, 1)".to_string(),
            });
        }
        if self.sphere.camera_distance <= self.sphere.radius {
            return Err(ConfigError::Invalid {
                field: "sphere.camera_distance",
                reason: "camera must sit outside the sphere".to_string(),
            });
        }
        Ok(())
    }
}

/// Repository gallery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Account whose public repositories are listed
    pub username: String,
    /// REST API base URL
    pub api_base: String,
    /// Cards on the projects page
    pub gallery_limit: usize,
    /// Cards on the home and journey pages
    pub featured_limit: usize,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: "ardidrizi".to_string(),
            api_base: "https://api.github.com".to_string(),
            gallery_limit: 9,
            featured_limit: 6,
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Local storage key for the visitor's choice
    pub storage_key: String,
    /// Mode used when nothing is stored
    pub default_mode: ThemeMode,
    /// Daytime window for auto mode
    pub daylight: Daylight,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme-preference".to_string(),
            default_mode: ThemeMode::Auto,
            daylight: Daylight::default(),
        }
    }
}

/// Particle background configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Screen area (px²) per particle
    pub area_per_particle: f64,
    /// Hard cap on particle count for very large screens
    pub max_particles: usize,
    /// Pointer influence radius (px)
    pub pointer_radius: f64,
    /// Velocity change at zero distance from the pointer
    pub pointer_force: f64,
    /// Maximum distance for a connecting line (px)
    pub link_distance: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 15_000.0,
            max_particles: 400,
            pointer_radius: 150.0,
            pointer_force: 0.2,
            link_distance: 100.0,
        }
    }
}

/// Skills sphere configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Sphere radius in scene units
    pub radius: f64,
    /// Camera distance from the sphere centre
    pub camera_distance: f64,
    /// Idle yaw speed (radians per frame)
    pub auto_rotate: f64,
    /// Fraction of drag velocity lost each frame
    pub damping: f64,
    /// Radians of rotation per dragged pixel
    pub drag_sensitivity: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            camera_distance: 30.0,
            auto_rotate: 0.004,
            damping: 0.08,
            drag_sensitivity: 0.005,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.theme.storage_key, "theme-preference");
        assert!(!config.github.username.is_empty());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [github]
            username = "octocat"
            "#,
        )
        .unwrap();

        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.particles, ParticleConfig::default());
    }

    #[test]
    fn test_rejects_inverted_daylight() {
        let err = SiteConfig::from_toml_str(
            r#"
            [theme.daylight]
            start_hour = 20
            end_hour = 6
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { field: "theme.daylight", .. }));
    }

    #[test]
    fn test_rejects_camera_inside_sphere() {
        let mut config = SiteConfig::default();
        config.sphere.camera_distance = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = SiteConfig::from_toml_str("github = 3").unwrap_err();
        assert!(err.to_string().contains("site config"));
    }
}
