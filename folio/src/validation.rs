//! Site validation
//!
//! Checks an assembled [`Site`] for problems that would produce a broken
//! page. All problems are collected rather than stopping at the first one.

use crate::contact::is_valid_email;
use crate::content::ContentItem;
use crate::site_model::Site;
use crate::tracker::{RevealSettings, SectionId, TrackerError};
use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid section list: {0}")]
    Sections(#[from] TrackerError),

    #[error("Initial section '{0}' is not one of the declared sections")]
    UnknownInitialSection(SectionId),

    #[error("Activation offset must be a finite number, got {0}")]
    InvalidActivationOffset(f64),

    #[error("Section '{section}' has reveal threshold {threshold}, expected 0.0 to 1.0")]
    InvalidRevealThreshold { section: SectionId, threshold: f64 },

    #[error("Section '{section}' has reveal margin {margin}, expected a finite number")]
    InvalidRevealMargin { section: SectionId, margin: f64 },

    #[error("Section '{section}' has height {height}, expected a positive number")]
    InvalidHeight { section: SectionId, height: f64 },

    #[error("No section is shown in the navigation bar")]
    EmptyNavigation,

    #[error("'{name}' in section '{section}' has level {value}, expected at most 100")]
    PercentOutOfRange {
        section: SectionId,
        name: String,
        value: u8,
    },

    #[error("Project slug '{0}' is used more than once")]
    DuplicateProjectSlug(String),

    #[error("Project slug '{0}' must be lowercase letters, digits and single hyphens")]
    InvalidProjectSlug(String),

    #[error("Owner email '{0}' is not a valid address")]
    InvalidOwnerEmail(String),

    #[error("Link '{url}' for {context} must be http(s)://, mailto: or site-relative")]
    InvalidUrl { context: String, url: String },

    #[error("Multiple validation errors:\n{}", format_list(.0))]
    Multiple(Vec<ValidationError>),
}

fn format_list(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| format!("  - {}", e)).join("\n")
}

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_regex() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("Invalid slug regex"))
}

/// Whether a link is usable in generated markup
pub fn is_acceptable_url(url: &str) -> bool {
    url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("mailto:")
        || url.starts_with('/')
        || url.starts_with('#')
}

/// Validate an assembled site
///
/// # Returns
/// * `Ok(())` - No problems found
/// * `Err(ValidationError)` - A single problem, or `Multiple` when there are several
pub fn validate(site: &Site) -> Result<(), ValidationError> {
    let mut errors = collect_errors(site);

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// Every problem found in a site, in a stable order
pub fn collect_errors(site: &Site) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_tracker(site, &mut errors);
    check_sections(site, &mut errors);
    check_projects(site, &mut errors);
    check_links(site, &mut errors);

    errors
}

fn check_tracker(site: &Site, errors: &mut Vec<ValidationError>) {
    match site.section_list() {
        Ok(list) => {
            if !list.contains(&site.tracker.initial_section) {
                errors.push(ValidationError::UnknownInitialSection(
                    site.tracker.initial_section.clone(),
                ));
            }
        }
        Err(e) => errors.push(ValidationError::Sections(e)),
    }

    if !site.tracker.activation_offset.is_finite() {
        errors.push(ValidationError::InvalidActivationOffset(
            site.tracker.activation_offset,
        ));
    }

    if !site.sections.is_empty() && site.nav_sections().next().is_none() {
        errors.push(ValidationError::EmptyNavigation);
    }
}

fn check_sections(site: &Site, errors: &mut Vec<ValidationError>) {
    for section in &site.sections {
        let id = &section.descriptor.id;

        check_reveal(id, section.reveal, errors);

        if !(section.height.is_finite() && section.height > 0.0) {
            errors.push(ValidationError::InvalidHeight {
                section: id.clone(),
                height: section.height,
            });
        }

        for item in &section.items {
            let percent = match item {
                ContentItem::Skill(skill) => Some((&skill.name, skill.level)),
                ContentItem::Proficiency(p) => Some((&p.name, p.percentage)),
                _ => None,
            };
            if let Some((name, value)) = percent {
                if value > 100 {
                    errors.push(ValidationError::PercentOutOfRange {
                        section: id.clone(),
                        name: name.clone(),
                        value,
                    });
                }
            }
        }
    }

    if let Some(now) = &site.now {
        let now_section = SectionId::from("now");
        for entry in now.groups.iter().flat_map(|group| group.entries.iter()) {
            if let Some(progress) = entry.progress.filter(|p| *p > 100) {
                errors.push(ValidationError::PercentOutOfRange {
                    section: now_section.clone(),
                    name: entry.title.clone(),
                    value: progress,
                });
            }
        }
    }
}

fn check_reveal(id: &SectionId, reveal: RevealSettings, errors: &mut Vec<ValidationError>) {
    if !(0.0..=1.0).contains(&reveal.threshold) {
        errors.push(ValidationError::InvalidRevealThreshold {
            section: id.clone(),
            threshold: reveal.threshold,
        });
    }
    if !reveal.margin.is_finite() {
        errors.push(ValidationError::InvalidRevealMargin {
            section: id.clone(),
            margin: reveal.margin,
        });
    }
}

fn check_projects(site: &Site, errors: &mut Vec<ValidationError>) {
    for slug in site.projects().map(|p| p.slug.as_str()).duplicates() {
        errors.push(ValidationError::DuplicateProjectSlug(slug.to_string()));
    }

    for project in site.projects() {
        if !slug_regex().is_match(&project.slug) {
            errors.push(ValidationError::InvalidProjectSlug(project.slug.clone()));
        }
        let links = [
            ("live link", &project.live_url),
            ("source link", &project.source_url),
        ];
        for (kind, url) in links {
            if let Some(url) = url {
                push_url_error(format!("{} of project '{}'", kind, project.slug), url, errors);
            }
        }
    }
}

fn check_links(site: &Site, errors: &mut Vec<ValidationError>) {
    let metadata = &site.metadata;

    if !is_valid_email(&metadata.owner.email) {
        errors.push(ValidationError::InvalidOwnerEmail(
            metadata.owner.email.clone(),
        ));
    }

    for link in &metadata.social {
        push_url_error(format!("social link '{}'", link.label), &link.url, errors);
    }
    if let Some(url) = &metadata.scheduling_url {
        push_url_error("scheduling link".to_string(), url, errors);
    }
    if let Some(url) = &metadata.resume_url {
        push_url_error("resume link".to_string(), url, errors);
    }
    if let Some(url) = &metadata.url {
        push_url_error("site url".to_string(), url, errors);
    }
}

fn push_url_error(context: String, url: &str, errors: &mut Vec<ValidationError>) {
    if !is_acceptable_url(url) {
        errors.push(ValidationError::InvalidUrl {
            context,
            url: url.to_string(),
        });
    }
}
