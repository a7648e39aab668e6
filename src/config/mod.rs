//! Configuration management
//!
//! The site itself (menu, call-to-action, scroll-spy tuning, page copy) is
//! compiled in from `site.json` so the server render and the hydrated client
//! always agree. Process settings for the server binary live in [`server`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spy::tracker::{DEFAULT_SCROLLED_THRESHOLD, DEFAULT_VIEWPORT_DIVISOR};
use crate::spy::{is_section_id, MenuItem, ScrollTracker};

#[cfg(feature = "server")]
pub mod server;

/// Site definition bundled into the binary
const EMBEDDED_SITE: &str = include_str!("site.json");

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid site.json: {0}")]
    Parse(String),

    #[error("menu must contain at least one item")]
    EmptyMenu,

    #[error("menu id '{0}' appears more than once")]
    DuplicateMenuId(String),

    #[error("'{0}' is not a page section")]
    UnknownSection(String),

    #[error("spy.{0} is out of range")]
    OutOfRange(&'static str),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub menu: Vec<MenuItem>,
    pub cta: CallToAction,
    #[serde(default)]
    pub spy: SpySettings,
    pub content: SiteContent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub target: String,
}

/// Scroll-spy tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpySettings {
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: f64,
    #[serde(default = "default_viewport_divisor")]
    pub viewport_divisor: f64,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u32,
    #[serde(default = "default_easing")]
    pub easing: String,
}

fn default_scrolled_threshold() -> f64 {
    DEFAULT_SCROLLED_THRESHOLD
}

fn default_viewport_divisor() -> f64 {
    DEFAULT_VIEWPORT_DIVISOR
}

fn default_transition_ms() -> u32 {
    300
}

fn default_easing() -> String {
    "ease-out".to_string()
}

impl Default for SpySettings {
    fn default() -> Self {
        Self {
            scrolled_threshold: default_scrolled_threshold(),
            viewport_divisor: default_viewport_divisor(),
            transition_ms: default_transition_ms(),
            easing: default_easing(),
        }
    }
}

impl SpySettings {
    pub fn tracker(&self) -> ScrollTracker {
        ScrollTracker::new(self.scrolled_threshold, self.viewport_divisor)
    }
}

/// Static copy for the five sections
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub badge: String,
    pub headline: String,
    pub tagline: String,
    pub about: String,
    pub skills_intro: String,
    pub skills: Vec<String>,
    pub projects_intro: String,
    pub projects: Vec<ProjectCard>,
    pub contact_intro: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub summary: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "PG".to_string(),
            menu: vec![
                MenuItem::new("home", "Home"),
                MenuItem::new("about", "About"),
                MenuItem::new("skills", "Skills"),
                MenuItem::new("projects", "Projects"),
            ],
            cta: CallToAction {
                label: "Contact".to_string(),
                target: "contact".to_string(),
            },
            spy: SpySettings::default(),
            content: SiteContent::default(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            badge: "Scroll Spy Active ✨".to_string(),
            headline: "Welcome Home".to_string(),
            tagline: "Watch the animated indicator move smoothly as you scroll through sections"
                .to_string(),
            about: "Notice how the navbar indicator automatically moves to \"About\" as you scroll into this section. The scroll spy detects your position in real-time.".to_string(),
            skills_intro: "The indicator transitions smoothly with a 300ms ease-out animation"
                .to_string(),
            skills: ["Rust", "Dioxus", "WebAssembly", "UI/UX Design", "Glassmorphism", "Scroll Spy"]
                .into_iter()
                .map(String::from)
                .collect(),
            projects_intro: "Click any menu item to jump to that section with smooth scrolling, and watch the indicator follow your clicks instantly".to_string(),
            projects: (1..=4)
                .map(|i| ProjectCard {
                    title: format!("Project {i}"),
                    summary: "Glassmorphism design showcase".to_string(),
                })
                .collect(),
            contact_intro: "Get in touch and let's create something amazing together".to_string(),
            email: "hello@example.com".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a site definition.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The bundled site definition, or the defaults if it is unusable.
    pub fn embedded() -> Self {
        match Self::parse(EMBEDDED_SITE) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default site config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.menu.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }

        for (i, item) in self.menu.iter().enumerate() {
            if !is_section_id(&item.id) {
                return Err(ConfigError::UnknownSection(item.id.clone()));
            }
            if self.menu[..i].iter().any(|prev| prev.id == item.id) {
                return Err(ConfigError::DuplicateMenuId(item.id.clone()));
            }
        }

        if !is_section_id(&self.cta.target) {
            return Err(ConfigError::UnknownSection(self.cta.target.clone()));
        }

        if self.spy.scrolled_threshold < 0.0 {
            return Err(ConfigError::OutOfRange("scrolled_threshold"));
        }
        if self.spy.viewport_divisor <= 0.0 {
            return Err(ConfigError::OutOfRange("viewport_divisor"));
        }
        if self.spy.transition_ms == 0 {
            return Err(ConfigError::OutOfRange("transition_ms"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_matches_defaults() {
        // Keeps the fallback in step with site.json
        let parsed = SiteConfig::parse(EMBEDDED_SITE).expect("site.json should be valid");
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_missing_spy_block_uses_defaults() {
        let mut value = serde_json::to_value(SiteConfig::default()).unwrap();
        value.as_object_mut().unwrap().remove("spy");

        let config = SiteConfig::parse(&value.to_string()).unwrap();
        assert_eq!(config.spy, SpySettings::default());
        assert_eq!(config.spy.transition_ms, 300);
    }

    #[test]
    fn test_rejects_duplicate_menu_ids() {
        let mut config = SiteConfig::default();
        config.menu.push(MenuItem::new("about", "About again"));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateMenuId("about".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_sections() {
        let mut config = SiteConfig::default();
        config.menu[1].id = "blog".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownSection("blog".to_string()))
        );

        let mut config = SiteConfig::default();
        config.cta.target = "footer".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_tuning() {
        let mut config = SiteConfig::default();
        config.spy.viewport_divisor = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange("viewport_divisor"))
        );

        let mut config = SiteConfig::default();
        config.menu.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyMenu));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            SiteConfig::parse("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
