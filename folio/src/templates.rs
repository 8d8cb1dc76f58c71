//! Embedded site templates
//!
//! This module contains the starter sites compiled into the binary and used by
//! `folio init`.

use crate::site_config::{SiteConfig, SiteConfigError, CONFIG_FILE_NAME};

/// Template metadata for display and lookup
#[derive(Debug, Clone)]
pub struct TemplateInfo {
    /// Template identifier (e.g., "starter")
    pub id: &'static str,
    /// One-line description for `folio templates`
    pub description: &'static str,
    /// Content of folio.toml
    pub config: &'static str,
    /// Side files to create (relative path, content)
    pub files: Vec<(&'static str, &'static str)>,
}

/// Get all available templates
///
/// # Returns
/// * `Vec<TemplateInfo>` - Vector of all built-in template definitions
pub fn get_all_templates() -> Vec<TemplateInfo> {
    vec![
        TemplateInfo {
            id: "starter",
            description: "Hero, about, skills, projects and contact sections with sample content",
            config: include_str!("templates/starter/folio.toml"),
            files: vec![
                ("skills.csv", include_str!("templates/starter/skills.csv")),
                (
                    "projects/sample-project.md",
                    include_str!("templates/starter/projects/sample-project.md"),
                ),
            ],
        },
        TemplateInfo {
            id: "minimal",
            description: "Hero and contact sections only",
            config: include_str!("templates/minimal/folio.toml"),
            files: Vec::new(),
        },
    ]
}

/// Get a template by ID
///
/// # Parameters
/// * `id` - Template identifier, case-insensitive
///
/// # Returns
/// * `Some(TemplateInfo)` - Template information if found
/// * `None` - No template found matching the given identifier
pub fn get_template(id: &str) -> Option<TemplateInfo> {
    get_all_templates()
        .into_iter()
        .find(|template| template.id.eq_ignore_ascii_case(id))
}

/// Parse the folio.toml of a template
///
/// # Parameters
/// * `template_info` - Template to parse
///
/// # Returns
/// * `Ok(SiteConfig)` - Successfully parsed configuration
/// * `Err(SiteConfigError)` - Error parsing TOML content
pub fn parse_template(template_info: &TemplateInfo) -> Result<SiteConfig, SiteConfigError> {
    SiteConfig::parse(template_info.config)
}

/// Personalise a template configuration with the owner's name
pub fn apply_owner_name(config: &mut SiteConfig, name: &str) {
    let placeholder = config.owner.name.clone();
    config.owner.name = name.to_string();
    config.title = config.title.replace(&placeholder, name);
    for section in &mut config.sections {
        section.title = section.title.replace(&placeholder, name);
    }
}

/// Every file a template creates, folio.toml first
pub fn template_files(template_info: &TemplateInfo) -> Vec<&'static str> {
    std::iter::once(CONFIG_FILE_NAME)
        .chain(template_info.files.iter().map(|(path, _)| *path))
        .collect()
}
