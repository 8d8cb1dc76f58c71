//! Content descriptors for page sections
//!
//! Every item placed in a section is one variant of [`ContentItem`]. The
//! `kind` field in `folio.toml` selects the variant and with it the rendering
//! treatment:
//!
//! ```toml
//! [[sections.items]]
//! kind = "stat"
//! value = "3+"
//! label = "Years Experience"
//! icon = "code"
//! ```

use serde::{Deserialize, Serialize};

/// Icons available to content items and links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Code,
    Palette,
    Zap,
    Users,
    Award,
    Heart,
    Database,
    Cloud,
    Shield,
    Globe,
    Cpu,
    Briefcase,
    GraduationCap,
    Github,
    Linkedin,
    Twitter,
    Mail,
    Phone,
    MapPin,
    Calendar,
    Target,
    BookOpen,
    Smartphone,
    ExternalLink,
    FileText,
}

impl Icon {
    /// Text glyph used in place of an icon font
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "💻",
            Icon::Palette => "🎨",
            Icon::Zap => "⚡",
            Icon::Users => "👥",
            Icon::Award => "🏆",
            Icon::Heart => "❤️",
            Icon::Database => "🗄️",
            Icon::Cloud => "☁️",
            Icon::Shield => "🛡️",
            Icon::Globe => "🌐",
            Icon::Cpu => "🖥️",
            Icon::Briefcase => "💼",
            Icon::GraduationCap => "🎓",
            Icon::Github => "🐙",
            Icon::Linkedin => "🔗",
            Icon::Twitter => "🐦",
            Icon::Mail => "✉️",
            Icon::Phone => "📞",
            Icon::MapPin => "📍",
            Icon::Calendar => "📅",
            Icon::Target => "🎯",
            Icon::BookOpen => "📖",
            Icon::Smartphone => "📱",
            Icon::ExternalLink => "↗",
            Icon::FileText => "📄",
        }
    }
}

/// One piece of section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContentItem {
    Stat(Stat),
    Proficiency(Proficiency),
    Skill(Skill),
    Timeline(TimelineEntry),
    Experience(ExperienceEntry),
    Project(Project),
    Education(EducationEntry),
    Certification(Certification),
}

impl ContentItem {
    /// The `kind` tag, also used as the CSS class of the rendered item
    pub fn kind(&self) -> &'static str {
        match self {
            ContentItem::Stat(_) => "stat",
            ContentItem::Proficiency(_) => "proficiency",
            ContentItem::Skill(_) => "skill",
            ContentItem::Timeline(_) => "timeline",
            ContentItem::Experience(_) => "experience",
            ContentItem::Project(_) => "project",
            ContentItem::Education(_) => "education",
            ContentItem::Certification(_) => "certification",
        }
    }

    pub fn as_project(&self) -> Option<&Project> {
        match self {
            ContentItem::Project(project) => Some(project),
            _ => None,
        }
    }
}

/// Headline number ("3+ Years Experience")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub icon: Icon,
}

/// Broad skill area with a percentage bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proficiency {
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub percentage: u8,
}

/// Single technology inside a skill category
///
/// Also the record type of `skills_csv` files (`category,name,level,glyph`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub category: String,
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub glyph: Option<String>,
}

/// Short dated entry in the about section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Employment type, e.g. "Full-time"
    #[serde(default)]
    pub employment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// URL segment of the detail page (`/projects/<slug>/`)
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub glyph: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    pub duration: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default = "default_certification_icon")]
    pub icon: Icon,
}

fn default_certification_icon() -> Icon {
    Icon::Award
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Items {
        items: Vec<ContentItem>,
    }

    #[test]
    fn test_kind_tag_selects_variant() {
        let toml_content = r#"
[[items]]
kind = "stat"
value = "20+"
label = "Projects Built"
icon = "palette"

[[items]]
kind = "certification"
name = "AWS Certified Solutions Architect"
issuer = "Amazon Web Services"
year = "2024"

[[items]]
kind = "skill"
category = "backend"
name = "Python"
level = 90
glyph = "🐍"
"#;

        let parsed: Items = toml::from_str(toml_content).unwrap();
        assert_eq!(parsed.items.len(), 3);

        match &parsed.items[0] {
            ContentItem::Stat(stat) => {
                assert_eq!(stat.value, "20+");
                assert_eq!(stat.icon, Icon::Palette);
            }
            other => panic!("expected stat, got {:?}", other),
        }

        match &parsed.items[1] {
            ContentItem::Certification(cert) => assert_eq!(cert.icon, Icon::Award),
            other => panic!("expected certification, got {:?}", other),
        }

        assert_eq!(parsed.items[2].kind(), "skill");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let toml_content = r#"
[[items]]
kind = "testimonial"
quote = "Great work"
"#;
        assert!(toml::from_str::<Items>(toml_content).is_err());
    }

    #[test]
    fn test_project_optional_fields_default() {
        let toml_content = r#"
[[items]]
kind = "project"
slug = "datavision"
title = "DataVision"
description = "ETL and analytics"
"#;
        let parsed: Items = toml::from_str(toml_content).unwrap();
        let project = parsed.items[0].as_project().unwrap();
        assert_eq!(project.slug, "datavision");
        assert!(project.technologies.is_empty());
        assert!(project.live_url.is_none());
    }

    #[test]
    fn test_kebab_case_icons() {
        #[derive(Deserialize)]
        struct Wrapper {
            icon: Icon,
        }
        let wrapper: Wrapper = toml::from_str("icon = \"graduation-cap\"").unwrap();
        assert_eq!(wrapper.icon, Icon::GraduationCap);
    }
}
