//! Three-stage site build pipeline
//!
//! This module orchestrates the three stages of building a site:
//! 1. **Loading**: Read folio.toml, skill CSV files, project pages and the avatar
//! 2. **Assembly**: Convert the loaded sources into the [`Site`] model
//! 3. **Export**: Write the HTML pages

use crate::content::{ContentItem, Skill};
use crate::site_config::{SiteConfig, SiteConfigError, CONFIG_FILE_NAME};
use crate::site_model::{Avatar, PageSection, ProjectPage, Site, SiteMetadata};
use crate::tracker::{SectionDescriptor, SectionId};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use pulldown_cmark::{html, Options, Parser};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Directory holding project detail pages (`<slug>.md`)
pub const PROJECTS_DIR: &str = "projects";

/// Everything read from disk, before assembly
#[derive(Debug)]
pub struct SiteSources {
    /// Root directory of the site
    pub root: PathBuf,
    /// Parsed folio.toml
    pub config: SiteConfig,
    /// Skills loaded from `skills_csv` files, keyed by section
    pub csv_skills: HashMap<SectionId, Vec<Skill>>,
    /// Project detail sources
    pub project_sources: Vec<ProjectSource>,
    /// Raw avatar image
    pub avatar: Option<AvatarSource>,
}

/// A `projects/<slug>.md` file
#[derive(Debug, Clone)]
pub struct ProjectSource {
    pub slug: String,
    /// Path relative to the site root
    pub path: PathBuf,
    pub markdown: String,
}

#[derive(Debug, Clone)]
pub struct AvatarSource {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Stage 1: Load all source files
///
/// # Parameters
/// * `root` - Site directory containing folio.toml
///
/// # Returns
/// * `Ok(SiteSources)` - Configuration and every referenced side file
/// * `Err(LoadError)` - Error reading or parsing a file
pub fn load_sources(root: &Path) -> Result<SiteSources, LoadError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    let config = SiteConfig::load(&config_path)
        .map_err(|e| LoadError::ConfigError(config_path.clone(), Box::new(e)))?;

    let mut csv_skills = HashMap::new();
    for section in &config.sections {
        if let Some(csv_path) = &section.skills_csv {
            let path = root.join(csv_path);
            let skills = load_skills_csv(&path)?;
            log::info!(
                "Loaded {} skills for '{}' from {}",
                skills.len(),
                section.id,
                path.display()
            );
            csv_skills.insert(section.id.clone(), skills);
        }
    }

    let project_sources = load_project_sources(root)?;

    let avatar = match &config.avatar {
        Some(avatar_path) => {
            let path = root.join(avatar_path);
            let bytes = std::fs::read(&path).map_err(|e| LoadError::IoError(path.clone(), e))?;
            Some(AvatarSource { path, bytes })
        }
        None => None,
    };

    Ok(SiteSources {
        root: root.to_path_buf(),
        config,
        csv_skills,
        project_sources,
        avatar,
    })
}

/// Read a `category,name,level,glyph` CSV file
fn load_skills_csv(path: &Path) -> Result<Vec<Skill>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| LoadError::CsvError(path.to_path_buf(), e))?;

    reader
        .deserialize::<Skill>()
        .map(|record| record.map_err(|e| LoadError::CsvError(path.to_path_buf(), e)))
        .collect()
}

/// Discover and read `projects/*.md`
fn load_project_sources(root: &Path) -> Result<Vec<ProjectSource>, LoadError> {
    let projects_dir = root.join(PROJECTS_DIR);
    if !projects_dir.is_dir() {
        return Ok(Vec::new());
    }

    let paths: Vec<PathBuf> = WalkDir::new(&projects_dir)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("md"))
        .map(|e| e.path().to_path_buf())
        .collect();

    #[cfg(feature = "parallel")]
    let sources: Result<Vec<_>, _> = paths
        .par_iter()
        .map(|path| read_project_source(path, root))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let sources: Result<Vec<_>, _> = paths
        .iter()
        .map(|path| read_project_source(path, root))
        .collect();

    sources
}

fn read_project_source(path: &Path, root: &Path) -> Result<ProjectSource, LoadError> {
    let markdown =
        std::fs::read_to_string(path).map_err(|e| LoadError::IoError(path.to_path_buf(), e))?;

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LoadError::InvalidFilename(path.to_path_buf()))?
        .to_string();

    log::debug!("Found project page '{}' at {}", slug, path.display());

    Ok(ProjectSource {
        slug,
        path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
        markdown,
    })
}

/// Stage 2: Assemble the site model
///
/// # Parameters
/// * `sources` - Loaded sources (ownership transferred)
///
/// # Returns
/// * `Site` - The assembled site; run [`crate::validation::validate`] before export
pub fn assemble(sources: SiteSources) -> Site {
    let SiteSources {
        root,
        config,
        mut csv_skills,
        project_sources,
        avatar,
    } = sources;

    let sections: Vec<PageSection> = config
        .sections
        .iter()
        .map(|section| {
            let mut items = section.items.clone();
            if let Some(skills) = csv_skills.remove(&section.id) {
                items.extend(skills.into_iter().map(ContentItem::Skill));
            }

            PageSection {
                descriptor: SectionDescriptor {
                    id: section.id.clone(),
                    label: section.label.clone(),
                },
                title: section.title.clone(),
                subtitle: section.subtitle.clone(),
                body_html: section.body.as_deref().map(render_markdown),
                layout: section.layout,
                nav: section.nav,
                height: section.height,
                reveal: config.reveal_for(section),
                items,
            }
        })
        .collect();

    let known_slugs: Vec<String> = sections
        .iter()
        .flat_map(|section| section.items.iter())
        .filter_map(ContentItem::as_project)
        .map(|project| project.slug.clone())
        .collect();

    let project_pages = project_sources
        .into_iter()
        .filter(|source| {
            let known = known_slugs.contains(&source.slug);
            if !known {
                log::warn!(
                    "Ignoring {}: no project with slug '{}'",
                    source.path.display(),
                    source.slug
                );
            }
            known
        })
        .map(|source| ProjectPage {
            body_html: render_markdown(&source.markdown),
            slug: source.slug,
            source_path: source.path,
        })
        .collect();

    let avatar = avatar.map(|source| embed_avatar(&source));

    let metadata = SiteMetadata {
        title: config.title,
        description: config.description,
        url: config.url,
        keywords: config.keywords,
        owner: config.owner,
        social: config.social,
        scheduling_url: config.scheduling_url,
        resume_url: config.resume_url,
    };

    Site {
        metadata,
        root,
        avatar,
        tracker: config.tracker,
        sections,
        project_pages,
        now: config.now,
    }
}

/// Encode the avatar as a data URL, reading its dimensions when possible
fn embed_avatar(source: &AvatarSource) -> Avatar {
    let mime_type = match source
        .path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    };

    let (width, height) = match imagesize::blob_size(&source.bytes) {
        Ok(size) => (Some(size.width), Some(size.height)),
        Err(e) => {
            log::warn!(
                "Could not read dimensions of {}: {}",
                source.path.display(),
                e
            );
            (None, None)
        }
    };

    Avatar {
        data_url: format!("data:{};base64,{}", mime_type, STANDARD.encode(&source.bytes)),
        width,
        height,
    }
}

/// Render Markdown to an HTML fragment
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Stage 3: Export the site
pub mod export {
    use crate::html_exporter::{self, ExportSummary, HtmlExportError};
    use crate::site_model::Site;
    use std::path::Path;

    /// Write every page of the site below `output_dir`
    pub fn to_html(site: &Site, output_dir: &Path) -> Result<ExportSummary, HtmlExportError> {
        html_exporter::to_html(site, output_dir)
    }
}

/// Loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}", path = .0.display(), source = .1)]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("Invalid filename format: {path}", path = .0.display())]
    InvalidFilename(PathBuf),

    #[error("Error reading CSV {path}: {source}", path = .0.display(), source = .1)]
    CsvError(PathBuf, #[source] csv::Error),

    #[error("Config error loading {path}: {source}", path = .0.display(), source = .1)]
    ConfigError(PathBuf, #[source] Box<SiteConfigError>),
}
