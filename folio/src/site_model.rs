//! Assembled site model (Stage 2 output)
//!
//! This module defines the structures produced after loading `folio.toml` and
//! its side files, ready for validation and export.

use crate::content::{ContentItem, Project};
use crate::site_config::{NowConfig, Owner, SectionLayout, SocialLink};
use crate::tracker::{
    RevealSettings, SectionDescriptor, SectionList, StackedLayout, TrackerError, TrackerSettings,
};
use std::path::PathBuf;

/// The assembled site ready for export
#[derive(Debug)]
pub struct Site {
    /// Site metadata
    pub metadata: SiteMetadata,
    /// Root directory of the source
    pub root: PathBuf,
    /// Embedded portrait, if configured and readable
    pub avatar: Option<Avatar>,
    /// Tracker parameters
    pub tracker: TrackerSettings,
    /// Page sections in page order
    pub sections: Vec<PageSection>,
    /// Detail pages, one per project with a `projects/<slug>.md` file
    pub project_pages: Vec<ProjectPage>,
    /// Content of the /now page
    pub now: Option<NowConfig>,
}

impl Site {
    /// Tracker section list in page order
    pub fn section_list(&self) -> Result<SectionList, TrackerError> {
        SectionList::new(
            self.sections
                .iter()
                .map(|section| section.descriptor.clone())
                .collect(),
        )
    }

    /// Sections shown in the navigation bar
    pub fn nav_sections(&self) -> impl Iterator<Item = &PageSection> {
        self.sections.iter().filter(|section| section.nav)
    }

    /// Every project item across all sections
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .filter_map(ContentItem::as_project)
    }

    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects().find(|project| project.slug == slug)
    }

    pub fn project_page(&self, slug: &str) -> Option<&ProjectPage> {
        self.project_pages.iter().find(|page| page.slug == slug)
    }

    /// Total number of content items
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    /// Layout built from the configured section heights
    pub fn stacked_layout(&self) -> StackedLayout {
        let mut layout = StackedLayout::new(0.0);
        for section in &self.sections {
            layout.push(section.descriptor.id.as_str(), section.height);
        }
        layout
    }
}

/// Site metadata
#[derive(Debug, Clone)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub keywords: Vec<String>,
    pub owner: Owner,
    pub social: Vec<SocialLink>,
    pub scheduling_url: Option<String>,
    pub resume_url: Option<String>,
}

/// Portrait image embedded into the page
#[derive(Debug, Clone)]
pub struct Avatar {
    /// `data:` URL with the base64-encoded image
    pub data_url: String,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

/// A section of the single page
#[derive(Debug, Clone)]
pub struct PageSection {
    /// Tracker descriptor (id and navigation label)
    pub descriptor: SectionDescriptor,
    /// Section heading
    pub title: String,
    pub subtitle: Option<String>,
    /// Rendered Markdown body
    pub body_html: Option<String>,
    /// Rendering treatment
    pub layout: SectionLayout,
    /// Whether the section appears in the navigation bar
    pub nav: bool,
    /// Estimated height used for simulation
    pub height: f64,
    /// Effective reveal settings
    pub reveal: RevealSettings,
    /// Content items, CSV skills appended after the inline ones
    pub items: Vec<ContentItem>,
}

impl PageSection {
    pub fn id(&self) -> &str {
        self.descriptor.id.as_str()
    }

    /// Whether any item in this section is a project
    pub fn has_projects(&self) -> bool {
        self.items.iter().any(|item| item.as_project().is_some())
    }
}

/// Detail page for a project
#[derive(Debug, Clone)]
pub struct ProjectPage {
    /// Slug of the matching project item
    pub slug: String,
    /// Source file relative to the site root
    pub source_path: PathBuf,
    /// Rendered Markdown
    pub body_html: String,
}
