//! Site configuration from folio.toml

use crate::content::{ContentItem, Icon};
use crate::tracker::{RevealSettings, SectionId, TrackerSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file at the root of a site directory
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Main site configuration from folio.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Page title (`<title>` and Open Graph title)
    pub title: String,

    /// Meta description
    pub description: String,

    /// Canonical URL of the deployed site
    #[serde(default)]
    pub url: Option<String>,

    /// Meta keywords
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Scheduling link opened in the "hire me" modal
    #[serde(default)]
    pub scheduling_url: Option<String>,

    /// Link for the resume button in the navigation
    #[serde(default)]
    pub resume_url: Option<String>,

    /// Portrait image, relative to the site directory; embedded as a data URL
    #[serde(default)]
    pub avatar: Option<String>,

    /// Site owner
    pub owner: Owner,

    /// Social profile links
    #[serde(default)]
    pub social: Vec<SocialLink>,

    /// Active-section tracker parameters
    #[serde(default)]
    pub tracker: TrackerSettings,

    /// Default reveal settings for sections without an override
    #[serde(default)]
    pub reveal: RevealSettings,

    /// Page sections, in page order
    pub sections: Vec<SectionConfig>,

    /// Content of the /now page
    #[serde(default)]
    pub now: Option<NowConfig>,
}

/// Site owner information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    /// Full name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Job title shown in the hero
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

/// Link to a social profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    #[serde(default = "default_social_icon")]
    pub icon: Icon,
}

fn default_social_icon() -> Icon {
    Icon::ExternalLink
}

/// One page section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Anchor id; also the tracker's section id
    pub id: SectionId,

    /// Navigation label
    pub label: String,

    /// Section heading
    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    /// Markdown rendered above the items
    #[serde(default)]
    pub body: Option<String>,

    /// Rendering treatment of the section
    #[serde(default)]
    pub layout: SectionLayout,

    /// Whether the section appears in the navigation bar
    #[serde(default = "default_true")]
    pub nav: bool,

    /// Estimated rendered height, used by `folio simulate`
    #[serde(default = "default_section_height")]
    pub height: f64,

    /// Reveal settings overriding the site default
    #[serde(default)]
    pub reveal: Option<RevealSettings>,

    /// CSV file of additional skills (`category,name,level,glyph`)
    #[serde(default)]
    pub skills_csv: Option<String>,

    #[serde(default)]
    pub items: Vec<ContentItem>,
}

/// Rendering treatment of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionLayout {
    /// Heading, body and items
    #[default]
    Standard,
    /// Owner introduction with social links and call-to-action buttons
    Hero,
    /// Contact details and the contact form
    Contact,
}

fn default_true() -> bool {
    true
}

fn default_section_height() -> f64 {
    800.0
}

/// Content of the /now page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NowConfig {
    /// Human-readable date of the last update
    #[serde(default)]
    pub updated: Option<String>,

    #[serde(default)]
    pub groups: Vec<NowGroup>,
}

/// A titled group of /now entries ("Current Projects", "Learning Goals")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NowGroup {
    pub title: String,
    #[serde(default = "default_now_icon")]
    pub icon: Icon,
    #[serde(default)]
    pub entries: Vec<NowEntry>,
}

fn default_now_icon() -> Icon {
    Icon::Target
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NowEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Completion percentage, rendered as a progress bar
    #[serde(default)]
    pub progress: Option<u8>,
    /// Free-form status line ("In Progress", "2 articles per month")
    #[serde(default)]
    pub status: Option<String>,
}

impl SiteConfig {
    /// Load configuration from a folio.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the folio.toml configuration file
    ///
    /// # Returns
    /// * `Ok(SiteConfig)` - Successfully loaded configuration
    /// * `Err(SiteConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SiteConfigError> {
        let content = fs::read_to_string(&path).map_err(SiteConfigError::IoError)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, SiteConfigError> {
        toml::from_str(content).map_err(SiteConfigError::ParseError)
    }

    /// Save configuration to a folio.toml file
    ///
    /// # Parameters
    /// * `path` - Path where the folio.toml file will be written
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(SiteConfigError)` - Error serializing or writing the configuration file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SiteConfigError> {
        let content = toml::to_string_pretty(self).map_err(SiteConfigError::SerializeError)?;

        fs::write(&path, content).map_err(SiteConfigError::IoError)?;

        Ok(())
    }

    /// Effective reveal settings of a section
    pub fn reveal_for(&self, section: &SectionConfig) -> RevealSettings {
        section.reveal.unwrap_or(self.reveal)
    }
}

/// Errors that can occur when loading or saving site configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SiteConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for SiteConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteConfigError::IoError(e) => write!(f, "IO error: {}", e),
            SiteConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            SiteConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for SiteConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
title = "Sam Rivera | Backend Engineer"
description = "APIs, pipelines and cloud infrastructure"
scheduling_url = "https://calendly.com/sam-rivera/intro"

[owner]
name = "Sam Rivera"
email = "sam@example.com"

[[sections]]
id = "home"
label = "Home"
title = "Hi, I'm Sam"
layout = "standard"

[[sections]]
id = "education"
label = "Education"
title = "Education"
nav = false
height = 1200
reveal = { threshold = 0.1, margin = -50.0 }
"#;

    #[test]
    fn test_parse_applies_defaults() {
        let config = SiteConfig::parse(MINIMAL).unwrap();

        assert_eq!(config.tracker.activation_offset, 100.0);
        assert_eq!(config.tracker.initial_section.as_str(), "home");
        assert_eq!(config.reveal.threshold, 0.3);
        assert!(config.social.is_empty());
        assert!(config.now.is_none());

        let home = &config.sections[0];
        assert!(home.nav);
        assert_eq!(home.layout, SectionLayout::Standard);
        assert_eq!(home.height, 800.0);
        assert_eq!(config.reveal_for(home), RevealSettings::default());
    }

    #[test]
    fn test_section_overrides() {
        let config = SiteConfig::parse(MINIMAL).unwrap();
        let education = &config.sections[1];

        assert!(!education.nav);
        assert_eq!(education.height, 1200.0);
        assert_eq!(
            config.reveal_for(education),
            RevealSettings {
                threshold: 0.1,
                margin: -50.0
            }
        );
    }

    #[test]
    fn test_tracker_table() {
        let content = format!(
            "{}\n[tracker]\nactivation_offset = 64.0\ninitial_section = \"about\"\n",
            MINIMAL
        );
        let config = SiteConfig::parse(&content).unwrap();
        assert_eq!(config.tracker.activation_offset, 64.0);
        assert_eq!(config.tracker.initial_section.as_str(), "about");
    }

    #[test]
    fn test_missing_owner_is_a_parse_error() {
        let result = SiteConfig::parse("title = \"x\"\ndescription = \"y\"\nsections = []\n");
        assert!(matches!(result, Err(SiteConfigError::ParseError(_))));
    }

    #[test]
    fn test_site_config_roundtrip() {
        let config = SiteConfig::parse(MINIMAL).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        config.save(&path).unwrap();
        let reloaded = SiteConfig::load(&path).unwrap();

        assert_eq!(reloaded.title, config.title);
        assert_eq!(reloaded.owner.email, "sam@example.com");
        assert_eq!(reloaded.sections.len(), 2);
        assert_eq!(reloaded.sections[1].reveal, config.sections[1].reveal);
    }
}
