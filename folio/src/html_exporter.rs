//! HTML exporter for assembled sites
//!
//! This module writes a [`Site`] as static pages:
//! - `index.html`: the single page with navigation, sections, footer and
//!   scheduling modal
//! - `404.html`
//! - `now/index.html` when a `[now]` table is configured
//! - `projects/<slug>/index.html` for every project with a detail page
//!
//! The single page embeds a small script that runs the same active-section
//! and reveal rules as [`crate::tracker`], configured from a JSON block.

use crate::contact::{Field, FieldError, SubmissionStatus, EMAIL_PATTERN, MIN_MESSAGE_LENGTH};
use crate::content::{
    Certification, ContentItem, EducationEntry, ExperienceEntry, Project, Proficiency, Skill,
    Stat, TimelineEntry,
};
use crate::scheduling::{ModalEvent, SchedulingModal};
use crate::site_config::{NowConfig, SectionLayout};
use crate::site_model::{PageSection, ProjectPage, Site};
use crate::tracker::{RevealState, SectionList, TrackerError};
use itertools::Itertools;
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Errors that can occur during HTML export
#[derive(Error, Debug)]
pub enum HtmlExportError {
    #[error("IO error writing {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid section list: {0}")]
    Sections(#[from] TrackerError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pages written by an export
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Written files, relative to the output directory
    pub pages: Vec<PathBuf>,
}

/// Export a site to HTML pages
///
/// # Parameters
/// * `site` - The assembled, validated site
/// * `output_dir` - Directory receiving the pages; created if missing
///
/// # Returns
/// * `Ok(ExportSummary)` - Every written page
/// * `Err(HtmlExportError)` - Error during export
pub fn to_html(site: &Site, output_dir: &Path) -> Result<ExportSummary, HtmlExportError> {
    let sections = site.section_list()?;
    let mut pages: Vec<(PathBuf, String)> = Vec::new();

    pages.push((PathBuf::from("index.html"), render_index(site, &sections)?));
    pages.push((PathBuf::from("404.html"), render_not_found(site)));

    if let Some(now) = &site.now {
        pages.push((PathBuf::from("now/index.html"), render_now(site, now)));
    }

    #[cfg(feature = "parallel")]
    let project_pages: Vec<(PathBuf, String)> = site
        .project_pages
        .par_iter()
        .filter_map(|page| render_project_entry(site, page))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let project_pages: Vec<(PathBuf, String)> = site
        .project_pages
        .iter()
        .filter_map(|page| render_project_entry(site, page))
        .collect();

    pages.extend(project_pages);

    let mut summary = ExportSummary::default();
    for (relative, html) in pages {
        write_page(&output_dir.join(&relative), &html)?;
        log::info!("Wrote {}", relative.display());
        summary.pages.push(relative);
    }

    Ok(summary)
}

fn render_project_entry(site: &Site, page: &ProjectPage) -> Option<(PathBuf, String)> {
    let project = site.project(&page.slug)?;
    let path = PathBuf::from("projects").join(&page.slug).join("index.html");
    Some((path, render_project_page(site, project, page)))
}

/// Write a page, creating parent directories if they don't exist
fn write_page(path: &Path, html: &str) -> Result<(), HtmlExportError> {
    let io_error = |source: std::io::Error| HtmlExportError::IoError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut file = fs::File::create(path).map_err(io_error)?;
    file.write_all(html.as_bytes()).map_err(io_error)?;

    Ok(())
}

/// Head metadata of one page
struct PageHead<'a> {
    title: String,
    description: &'a str,
    path: &'a str,
    json_ld: Option<serde_json::Value>,
}

/// Write the document head with meta tags and CSS
fn write_html_header(output: &mut String, site: &Site, head: &PageHead<'_>) {
    let metadata = &site.metadata;

    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(&head.title)));
    output.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_html(head.description)
    ));
    if !metadata.keywords.is_empty() {
        output.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\">\n",
            escape_html(&metadata.keywords.join(", "))
        ));
    }
    output.push_str(&format!(
        "<meta name=\"author\" content=\"{}\">\n",
        escape_html(&metadata.owner.name)
    ));
    output.push_str("<meta name=\"robots\" content=\"index, follow\">\n");

    output.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape_html(&head.title)
    ));
    output.push_str(&format!(
        "<meta property=\"og:description\" content=\"{}\">\n",
        escape_html(head.description)
    ));
    output.push_str("<meta property=\"og:type\" content=\"website\">\n");
    output.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
    output.push_str(&format!(
        "<meta name=\"twitter:title\" content=\"{}\">\n",
        escape_html(&head.title)
    ));

    if let Some(base) = &metadata.url {
        let canonical = format!("{}{}", base.trim_end_matches('/'), head.path);
        output.push_str(&format!(
            "<meta property=\"og:url\" content=\"{}\">\n",
            escape_html(&canonical)
        ));
        output.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape_html(&canonical)
        ));
    }

    if let Some(json_ld) = &head.json_ld {
        output.push_str("<script type=\"application/ld+json\">\n");
        output.push_str(&escape_script(&json_ld.to_string()));
        output.push_str("\n</script>\n");
    }

    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

/// Render the single page
pub fn render_index(site: &Site, sections: &SectionList) -> Result<String, HtmlExportError> {
    let metadata = &site.metadata;
    let mut output = String::new();

    let json_ld = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": metadata.owner.name,
        "jobTitle": metadata.owner.role,
        "description": metadata.description,
        "url": metadata.url,
        "sameAs": metadata.social.iter().map(|link| link.url.as_str()).collect::<Vec<_>>(),
        "knowsAbout": metadata.keywords,
    });

    write_html_header(
        &mut output,
        site,
        &PageHead {
            title: metadata.title.clone(),
            description: &metadata.description,
            path: "/",
            json_ld: Some(json_ld),
        },
    );

    output.push_str("<body>\n");
    output.push_str("<div class=\"app\">\n");

    write_navigation(&mut output, site);

    output.push_str("<main>\n");
    for section in &site.sections {
        write_section(&mut output, site, section);
    }
    output.push_str("</main>\n");

    write_footer(&mut output, site);

    if let Some(url) = &metadata.scheduling_url {
        write_scheduling_modal(&mut output, &SchedulingModal::new(url.as_str()));
    }

    output.push_str("</div>\n");

    write_tracker_config(&mut output, site, sections)?;
    output.push_str("<script>\n");
    output.push_str(PAGE_SCRIPT);
    output.push_str("</script>\n");

    output.push_str("</body>\n");
    output.push_str("</html>\n");

    Ok(output)
}

/// Write the navigation bar, marking the initial section active
fn write_navigation(output: &mut String, site: &Site) {
    output.push_str("<nav class=\"navigation\">\n");
    output.push_str("<div class=\"nav-container\">\n");
    output.push_str(&format!(
        "<a class=\"nav-logo\" href=\"#{}\"><span class=\"gradient-text\">{}</span></a>\n",
        escape_html(site.tracker.initial_section.as_str()),
        escape_html(&site.metadata.owner.name)
    ));

    output.push_str(
        "<button type=\"button\" class=\"nav-toggle\" aria-expanded=\"false\" aria-controls=\"nav-menu\" aria-label=\"Toggle menu\">&#9776;</button>\n",
    );
    output.push_str("<div class=\"nav-menu\" id=\"nav-menu\">\n");
    for section in site.nav_sections() {
        let active = section.descriptor.id == site.tracker.initial_section;
        output.push_str(&format!(
            "<a class=\"nav-item{}\" href=\"#{}\" data-section=\"{}\"{}>{}</a>\n",
            if active { " active" } else { "" },
            escape_html(section.id()),
            escape_html(section.id()),
            if active { " aria-current=\"true\"" } else { "" },
            escape_html(&section.descriptor.label)
        ));
    }
    if let Some(resume) = &site.metadata.resume_url {
        output.push_str(&format!(
            "<a class=\"nav-resume\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Resume</a>\n",
            escape_html(resume)
        ));
    }
    output.push_str("</div>\n");

    output.push_str("</div>\n");
    output.push_str("</nav>\n");
}

/// Write one page section
fn write_section(output: &mut String, site: &Site, section: &PageSection) {
    output.push_str(&format!(
        "<section id=\"{}\" class=\"section section-{} {}\" data-reveal-threshold=\"{}\" data-reveal-margin=\"{}\">\n",
        escape_html(section.id()),
        layout_class(section.layout),
        RevealState::Hidden.css_class(),
        section.reveal.threshold,
        section.reveal.margin
    ));
    output.push_str("<div class=\"container\">\n");

    match section.layout {
        SectionLayout::Hero => write_hero(output, site, section),
        SectionLayout::Standard | SectionLayout::Contact => {
            output.push_str("<div class=\"section-header\">\n");
            output.push_str(&format!(
                "<h2 class=\"section-title\">{}</h2>\n",
                escape_html(&section.title)
            ));
            if let Some(subtitle) = &section.subtitle {
                output.push_str(&format!(
                    "<p class=\"section-subtitle\">{}</p>\n",
                    escape_html(subtitle)
                ));
            }
            output.push_str("</div>\n");
            if let Some(body) = &section.body_html {
                output.push_str(&format!("<div class=\"section-body\">\n{}</div>\n", body));
            }
        }
    }

    write_items(output, site, &section.items);

    if section.layout == SectionLayout::Contact {
        write_contact(output, site);
    }

    output.push_str("</div>\n");
    output.push_str("</section>\n");
}

fn layout_class(layout: SectionLayout) -> &'static str {
    match layout {
        SectionLayout::Standard => "standard",
        SectionLayout::Hero => "hero",
        SectionLayout::Contact => "contact",
    }
}

/// Write the owner introduction
fn write_hero(output: &mut String, site: &Site, section: &PageSection) {
    let metadata = &site.metadata;

    output.push_str("<div class=\"hero-content\">\n");
    if let Some(avatar) = &site.avatar {
        let size = match (avatar.width, avatar.height) {
            (Some(width), Some(height)) => format!(" width=\"{}\" height=\"{}\"", width, height),
            _ => String::new(),
        };
        output.push_str(&format!(
            "<img class=\"hero-avatar\" src=\"{}\" alt=\"{}\"{}>\n",
            avatar.data_url,
            escape_html(&metadata.owner.name),
            size
        ));
    }
    output.push_str(&format!(
        "<h1 class=\"hero-title\">{}</h1>\n",
        escape_html(&section.title)
    ));
    if let Some(role) = &metadata.owner.role {
        output.push_str(&format!("<p class=\"hero-role\">{}</p>\n", escape_html(role)));
    }
    if let Some(subtitle) = &section.subtitle {
        output.push_str(&format!(
            "<p class=\"hero-subtitle\">{}</p>\n",
            escape_html(subtitle)
        ));
    }
    if let Some(body) = &section.body_html {
        output.push_str(&format!("<div class=\"hero-body\">\n{}</div>\n", body));
    }

    output.push_str("<div class=\"hero-actions\">\n");
    if metadata.scheduling_url.is_some() {
        output.push_str(
            "<button type=\"button\" class=\"btn btn-primary\" data-open-modal=\"scheduling\">Hire Me</button>\n",
        );
    }
    if let Some(work) = site.sections.iter().find(|section| section.has_projects()) {
        output.push_str(&format!(
            "<a class=\"btn btn-secondary\" href=\"#{}\">View My Work</a>\n",
            escape_html(work.id())
        ));
    }
    output.push_str("</div>\n");

    write_social_links(output, site, "hero-social");
    output.push_str("</div>\n");
}

fn write_social_links(output: &mut String, site: &Site, class: &str) {
    if site.metadata.social.is_empty() {
        return;
    }
    output.push_str(&format!("<div class=\"{}\">\n", class));
    for link in &site.metadata.social {
        output.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\"><span class=\"icon\">{}</span></a>\n",
            escape_html(&link.url),
            escape_html(&link.label),
            link.icon.glyph()
        ));
    }
    output.push_str("</div>\n");
}

/// Write content items, grouping consecutive items of the same kind
fn write_items(output: &mut String, site: &Site, items: &[ContentItem]) {
    for (kind, group) in &items.iter().chunk_by(|item| item.kind()) {
        let group: Vec<&ContentItem> = group.collect();
        if kind == "project" {
            write_project_filters(output, &group);
        }
        output.push_str(&format!("<div class=\"items items-{}\">\n", kind));

        if kind == "skill" {
            let skills: Vec<&Skill> = group
                .iter()
                .filter_map(|item| match item {
                    ContentItem::Skill(skill) => Some(skill),
                    _ => None,
                })
                .collect();
            write_skill_categories(output, &skills);
        } else {
            for item in group {
                write_item(output, site, item);
            }
        }

        output.push_str("</div>\n");
    }
}

fn write_item(output: &mut String, site: &Site, item: &ContentItem) {
    match item {
        ContentItem::Stat(stat) => write_stat(output, stat),
        ContentItem::Proficiency(proficiency) => write_proficiency(output, proficiency),
        ContentItem::Skill(skill) => write_skill(output, skill),
        ContentItem::Timeline(entry) => write_timeline(output, entry),
        ContentItem::Experience(entry) => write_experience(output, entry),
        ContentItem::Project(project) => write_project_card(output, site, project),
        ContentItem::Education(entry) => write_education(output, entry),
        ContentItem::Certification(cert) => write_certification(output, cert),
    }
}

fn write_stat(output: &mut String, stat: &Stat) {
    output.push_str(&format!(
        "<div class=\"stat-card\"><span class=\"icon\">{}</span><span class=\"stat-value\">{}</span><span class=\"stat-label\">{}</span></div>\n",
        stat.icon.glyph(),
        escape_html(&stat.value),
        escape_html(&stat.label)
    ));
}

fn write_proficiency(output: &mut String, proficiency: &Proficiency) {
    output.push_str("<div class=\"proficiency\">\n");
    output.push_str(&format!(
        "<div class=\"proficiency-header\"><span class=\"proficiency-name\">{}</span><span class=\"proficiency-percent\">{}%</span></div>\n",
        escape_html(&proficiency.name),
        proficiency.percentage
    ));
    if let Some(subtitle) = &proficiency.subtitle {
        output.push_str(&format!(
            "<span class=\"proficiency-subtitle\">{}</span>\n",
            escape_html(subtitle)
        ));
    }
    write_progress_bar(output, proficiency.percentage);
    output.push_str("</div>\n");
}

fn write_progress_bar(output: &mut String, percent: u8) {
    output.push_str(&format!(
        "<div class=\"progress-bar\"><div class=\"progress-fill\" style=\"width: {}%\"></div></div>\n",
        percent.min(100)
    ));
}

/// Write skills grouped by category, keeping first-seen category order
fn write_skill_categories(output: &mut String, skills: &[&Skill]) {
    let categories: Vec<&str> = skills
        .iter()
        .map(|skill| skill.category.as_str())
        .unique()
        .collect();

    for category in categories {
        output.push_str(&format!(
            "<div class=\"skill-category\">\n<h3 class=\"skill-category-title\">{}</h3>\n",
            escape_html(category)
        ));
        for skill in skills.iter().filter(|skill| skill.category == category) {
            write_skill(output, skill);
        }
        output.push_str("</div>\n");
    }
}

fn write_skill(output: &mut String, skill: &Skill) {
    output.push_str("<div class=\"skill\">\n");
    output.push_str(&format!(
        "<div class=\"skill-header\"><span class=\"skill-icon\">{}</span><span class=\"skill-name\">{}</span><span class=\"skill-level\">{}%</span></div>\n",
        escape_html(skill.glyph.as_deref().unwrap_or("")),
        escape_html(&skill.name),
        skill.level
    ));
    write_progress_bar(output, skill.level);
    output.push_str("</div>\n");
}

fn write_timeline(output: &mut String, entry: &TimelineEntry) {
    output.push_str(&format!(
        "<div class=\"timeline-item\"><span class=\"timeline-period\">{}</span><h4>{}</h4><p class=\"timeline-org\">{}</p><p>{}</p></div>\n",
        escape_html(&entry.period),
        escape_html(&entry.title),
        escape_html(&entry.organization),
        escape_html(&entry.description)
    ));
}

fn write_experience(output: &mut String, entry: &ExperienceEntry) {
    output.push_str("<article class=\"experience-card\">\n");
    output.push_str(&format!(
        "<header><h3>{}</h3><p class=\"experience-company\">{}</p>",
        escape_html(&entry.title),
        escape_html(&entry.company)
    ));
    output.push_str(&format!(
        "<p class=\"experience-meta\">{}",
        escape_html(&entry.period)
    ));
    if let Some(location) = &entry.location {
        output.push_str(&format!(" · {}", escape_html(location)));
    }
    if let Some(employment) = &entry.employment {
        output.push_str(&format!(" · {}", escape_html(employment)));
    }
    output.push_str("</p></header>\n");

    if !entry.description.is_empty() {
        output.push_str(&format!("<p>{}</p>\n", escape_html(&entry.description)));
    }
    write_list(output, "achievements", &entry.achievements);
    write_tags(output, &entry.technologies);
    output.push_str("</article>\n");
}

/// Write category filter buttons ahead of a project grid
///
/// Nothing is written when no project in the group has a category.
fn write_project_filters(output: &mut String, group: &[&ContentItem]) {
    let categories: Vec<&str> = group
        .iter()
        .filter_map(|item| item.as_project())
        .filter_map(|project| project.category.as_deref())
        .unique()
        .collect();
    if categories.is_empty() {
        return;
    }

    output.push_str("<div class=\"project-filters\" role=\"group\" aria-label=\"Filter projects\">\n");
    output.push_str(
        "<button type=\"button\" class=\"filter active\" data-filter=\"all\" aria-pressed=\"true\">All</button>\n",
    );
    for category in categories {
        output.push_str(&format!(
            "<button type=\"button\" class=\"filter\" data-filter=\"{}\" aria-pressed=\"false\">{}</button>\n",
            escape_html(category),
            escape_html(&capitalize(category))
        ));
    }
    output.push_str("</div>\n");
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn write_project_card(output: &mut String, site: &Site, project: &Project) {
    output.push_str(&format!(
        "<article class=\"project-card\" data-category=\"{}\">\n",
        escape_html(project.category.as_deref().unwrap_or(""))
    ));
    if let Some(glyph) = &project.glyph {
        output.push_str(&format!(
            "<div class=\"project-glyph\">{}</div>\n",
            escape_html(glyph)
        ));
    }
    output.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
    if let Some(year) = &project.year {
        output.push_str(&format!(
            "<span class=\"project-year\">{}</span>\n",
            escape_html(year)
        ));
    }
    output.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
    write_list(output, "features", &project.features);
    write_tags(output, &project.technologies);
    write_project_links(output, site, project);
    output.push_str("</article>\n");
}

fn write_project_links(output: &mut String, site: &Site, project: &Project) {
    output.push_str("<div class=\"project-links\">\n");
    if site.project_page(&project.slug).is_some() {
        output.push_str(&format!(
            "<a href=\"/projects/{}/\">Details</a>\n",
            escape_html(&project.slug)
        ));
    }
    if let Some(url) = &project.live_url {
        output.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Live Demo</a>\n",
            escape_html(url)
        ));
    }
    if let Some(url) = &project.source_url {
        output.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Source</a>\n",
            escape_html(url)
        ));
    }
    output.push_str("</div>\n");
}

fn write_education(output: &mut String, entry: &EducationEntry) {
    output.push_str("<article class=\"education-card\">\n");
    output.push_str(&format!(
        "<header><h3>{}</h3><p class=\"education-institution\">{}</p>",
        escape_html(&entry.degree),
        escape_html(&entry.institution)
    ));
    output.push_str(&format!(
        "<p class=\"education-meta\">{}",
        escape_html(&entry.duration)
    ));
    if let Some(location) = &entry.location {
        output.push_str(&format!(" · {}", escape_html(location)));
    }
    if let Some(gpa) = &entry.gpa {
        output.push_str(&format!(" · GPA {}", escape_html(gpa)));
    }
    output.push_str("</p></header>\n");

    if !entry.description.is_empty() {
        output.push_str(&format!("<p>{}</p>\n", escape_html(&entry.description)));
    }
    write_list(output, "highlights", &entry.highlights);
    write_tags(output, &entry.courses);
    output.push_str("</article>\n");
}

fn write_certification(output: &mut String, cert: &Certification) {
    output.push_str(&format!(
        "<div class=\"certification\"><span class=\"icon\">{}</span><div><h4>{}</h4><p>{}",
        cert.icon.glyph(),
        escape_html(&cert.name),
        escape_html(&cert.issuer)
    ));
    if let Some(year) = &cert.year {
        output.push_str(&format!(" · {}", escape_html(year)));
    }
    output.push_str("</p></div></div>\n");
}

fn write_list(output: &mut String, class: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    output.push_str(&format!("<ul class=\"{}\">\n", class));
    for entry in entries {
        output.push_str(&format!("<li>{}</li>\n", escape_html(entry)));
    }
    output.push_str("</ul>\n");
}

fn write_tags(output: &mut String, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    output.push_str("<div class=\"tags\">");
    for tag in tags {
        output.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
    }
    output.push_str("</div>\n");
}

/// Write contact details and the contact form
fn write_contact(output: &mut String, site: &Site) {
    let owner = &site.metadata.owner;

    output.push_str("<div class=\"contact-grid\">\n");
    output.push_str("<div class=\"contact-info\">\n");
    output.push_str(&format!(
        "<a class=\"contact-item\" href=\"mailto:{}\"><span class=\"icon\">✉️</span>{}</a>\n",
        escape_html(&owner.email),
        escape_html(&owner.email)
    ));
    if let Some(phone) = &owner.phone {
        output.push_str(&format!(
            "<a class=\"contact-item\" href=\"tel:{}\"><span class=\"icon\">📞</span>{}</a>\n",
            escape_html(&phone.replace(' ', "")),
            escape_html(phone)
        ));
    }
    if let Some(location) = &owner.location {
        output.push_str(&format!(
            "<span class=\"contact-item\"><span class=\"icon\">📍</span>{}</span>\n",
            escape_html(location)
        ));
    }
    write_social_links(output, site, "contact-social");
    output.push_str("</div>\n");

    output.push_str(&format!(
        "<form class=\"contact-form\" action=\"mailto:{}\" method=\"post\" enctype=\"text/plain\" novalidate data-email-pattern=\"{}\" data-min-message=\"{}\" data-status=\"{}\">\n",
        escape_html(&owner.email),
        escape_html(EMAIL_PATTERN),
        MIN_MESSAGE_LENGTH,
        SubmissionStatus::default().as_str()
    ));
    for field in Field::ALL {
        output.push_str(&format!(
            "<label for=\"{field}\">{}</label>\n",
            field.label()
        ));

        // Messages come from the rules in `crate::contact`; the script only shows them
        let mut messages = format!(
            " data-required-message=\"{}\"",
            escape_html(&FieldError::Required(field).to_string())
        );
        match field {
            Field::Email => messages.push_str(&format!(
                " data-invalid-message=\"{}\"",
                escape_html(&FieldError::InvalidEmail.to_string())
            )),
            Field::Message => messages.push_str(&format!(
                " data-too-short-message=\"{}\"",
                escape_html(&FieldError::MessageTooShort(MIN_MESSAGE_LENGTH).to_string())
            )),
            Field::Name | Field::Subject => {}
        }

        match field {
            Field::Message => output.push_str(&format!(
                "<textarea id=\"{field}\" name=\"{field}\" rows=\"5\" minlength=\"{}\" required{messages}></textarea>\n",
                MIN_MESSAGE_LENGTH
            )),
            _ => output.push_str(&format!(
                "<input id=\"{field}\" name=\"{field}\" type=\"{}\" required{messages}>\n",
                if field == Field::Email { "email" } else { "text" }
            )),
        }
        output.push_str(&format!(
            "<span class=\"field-error\" data-error-for=\"{field}\"></span>\n"
        ));
    }
    output.push_str("<button type=\"submit\" class=\"btn btn-primary\">Send Message</button>\n");
    output.push_str("<p class=\"form-status\" role=\"status\"></p>\n");
    output.push_str("</form>\n");
    output.push_str("</div>\n");
}

/// Write the footer with quick links to every navigable section
fn write_footer(output: &mut String, site: &Site) {
    output.push_str("<footer class=\"footer\">\n<div class=\"container\">\n");
    output.push_str("<nav class=\"footer-links\">\n");
    for section in site.nav_sections() {
        output.push_str(&format!(
            "<a href=\"#{}\">{}</a>\n",
            escape_html(section.id()),
            escape_html(&section.descriptor.label)
        ));
    }
    if site.now.is_some() {
        output.push_str("<a href=\"/now/\">Now</a>\n");
    }
    output.push_str("</nav>\n");
    write_social_links(output, site, "footer-social");
    output.push_str(
        "<button type=\"button\" class=\"back-to-top\" data-scroll-top aria-label=\"Back to top\">&uarr;</button>\n",
    );
    output.push_str(&format!(
        "<p class=\"footer-copy\">&copy; {}</p>\n",
        escape_html(&site.metadata.owner.name)
    ));
    output.push_str("</div>\n</footer>\n");
}

/// Write the scheduling dialog; it starts hidden
fn write_scheduling_modal(output: &mut String, modal: &SchedulingModal) {
    let close_on = ModalEvent::ALL
        .iter()
        .filter(|event| event.closes())
        .map(|event| event.name())
        .join(" ");
    output.push_str(&format!(
        "<div class=\"modal-overlay\" id=\"scheduling\" data-close-on=\"{}\" hidden>\n",
        close_on
    ));
    output.push_str("<div class=\"modal\" role=\"dialog\" aria-modal=\"true\" aria-label=\"Schedule a call\">\n");
    output.push_str("<button type=\"button\" class=\"modal-close\" data-close-modal aria-label=\"Close\">&times;</button>\n");
    output.push_str(&format!(
        "<iframe class=\"modal-frame\" title=\"Schedule a call\" loading=\"lazy\" data-src=\"{}\"></iframe>\n",
        escape_html(&modal.embed_url())
    ));
    output.push_str(&format!(
        "<a class=\"modal-fallback\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Open scheduling page</a>\n",
        escape_html(modal.url())
    ));
    output.push_str("</div>\n</div>\n");
}

/// Embed tracker and reveal parameters for the page script
fn write_tracker_config(
    output: &mut String,
    site: &Site,
    sections: &SectionList,
) -> Result<(), HtmlExportError> {
    let config = json!({
        "sections": sections.ids().map(|id| id.as_str()).collect::<Vec<_>>(),
        "activationOffset": site.tracker.activation_offset,
        "initialSection": site.tracker.initial_section.as_str(),
    });

    output.push_str("<script type=\"application/json\" id=\"folio-config\">\n");
    output.push_str(&escape_script(&serde_json::to_string(&config)?));
    output.push_str("\n</script>\n");
    Ok(())
}

/// Render the /now page
pub fn render_now(site: &Site, now: &NowConfig) -> String {
    let mut output = String::new();
    let description = format!(
        "What {} is focused on right now",
        site.metadata.owner.name
    );

    write_html_header(
        &mut output,
        site,
        &PageHead {
            title: "What I'm Working On Now".to_string(),
            description: &description,
            path: "/now/",
            json_ld: None,
        },
    );

    output.push_str("<body>\n<main class=\"page now-page\">\n<div class=\"container\">\n");
    output.push_str("<a class=\"back-link\" href=\"/\">&larr; Back to portfolio</a>\n");
    output.push_str("<h1 class=\"page-title\">What I'm Working On Now</h1>\n");
    if let Some(updated) = &now.updated {
        output.push_str(&format!(
            "<p class=\"page-subtitle\">Last updated: {}</p>\n",
            escape_html(updated)
        ));
    }

    for group in &now.groups {
        output.push_str("<section class=\"now-section\">\n");
        output.push_str(&format!(
            "<h2 class=\"section-title\"><span class=\"icon\">{}</span> {}</h2>\n",
            group.icon.glyph(),
            escape_html(&group.title)
        ));
        output.push_str("<div class=\"now-grid\">\n");
        for entry in &group.entries {
            output.push_str("<div class=\"now-card\">\n");
            output.push_str(&format!("<h3>{}</h3>\n", escape_html(&entry.title)));
            output.push_str(&format!("<p>{}</p>\n", escape_html(&entry.description)));
            if let Some(progress) = entry.progress {
                write_progress_bar(&mut output, progress);
                output.push_str(&format!(
                    "<span class=\"progress-text\">{}% Complete</span>\n",
                    progress.min(100)
                ));
            }
            if let Some(status) = &entry.status {
                output.push_str(&format!(
                    "<div class=\"now-status\">{}</div>\n",
                    escape_html(status)
                ));
            }
            output.push_str("</div>\n");
        }
        output.push_str("</div>\n</section>\n");
    }

    output.push_str("</div>\n</main>\n</body>\n</html>\n");
    output
}

/// Render the detail page of a project
pub fn render_project_page(site: &Site, project: &Project, page: &ProjectPage) -> String {
    let mut output = String::new();
    let path = format!("/projects/{}/", project.slug);

    let json_ld = json!({
        "@context": "https://schema.org",
        "@type": "CreativeWork",
        "name": project.title,
        "description": project.description,
        "author": { "@type": "Person", "name": site.metadata.owner.name },
        "keywords": project.technologies,
    });

    write_html_header(
        &mut output,
        site,
        &PageHead {
            title: format!("{} - Portfolio Project", project.title),
            description: &project.description,
            path: &path,
            json_ld: Some(json_ld),
        },
    );

    output.push_str("<body>\n<main class=\"page project-page\">\n<div class=\"container\">\n");
    output.push_str("<a class=\"back-link\" href=\"/#projects\">&larr; Back to projects</a>\n");
    output.push_str(&format!(
        "<h1 class=\"page-title\">{}</h1>\n",
        escape_html(&project.title)
    ));
    output.push_str(&format!(
        "<p class=\"page-subtitle\">{}</p>\n",
        escape_html(&project.description)
    ));

    let meta: Vec<&str> = [project.year.as_deref(), project.category.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !meta.is_empty() {
        output.push_str(&format!(
            "<p class=\"project-meta\">{}</p>\n",
            escape_html(&meta.join(" · "))
        ));
    }

    write_project_links(&mut output, site, project);
    write_tags(&mut output, &project.technologies);
    output.push_str(&format!(
        "<article class=\"project-body\">\n{}</article>\n",
        page.body_html
    ));
    write_list(&mut output, "features", &project.features);

    output.push_str("</div>\n</main>\n</body>\n</html>\n");
    output
}

/// Render the 404 page
pub fn render_not_found(site: &Site) -> String {
    let mut output = String::new();

    write_html_header(
        &mut output,
        site,
        &PageHead {
            title: "404 - Page Not Found".to_string(),
            description: "The page you are looking for does not exist.",
            path: "/404.html",
            json_ld: None,
        },
    );

    output.push_str("<body>\n<main class=\"page not-found\">\n<div class=\"container\">\n");
    output.push_str("<h1 class=\"error-code\">404</h1>\n");
    output.push_str("<h2 class=\"page-title\">Page Not Found</h2>\n");
    output.push_str(
        "<p class=\"page-subtitle\">The page you're looking for doesn't exist or has been moved.</p>\n",
    );
    output.push_str("<div class=\"quick-links\">\n");
    output.push_str("<a class=\"btn btn-primary\" href=\"/\">Go Home</a>\n");
    for section in site.nav_sections() {
        output.push_str(&format!(
            "<a class=\"quick-link\" href=\"/#{}\">{}</a>\n",
            escape_html(section.id()),
            escape_html(&section.descriptor.label)
        ));
    }
    if site.now.is_some() {
        output.push_str("<a class=\"quick-link\" href=\"/now/\">Now</a>\n");
    }
    output.push_str("</div>\n");
    output.push_str("</div>\n</main>\n</body>\n</html>\n");
    output
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Keep JSON from closing its `<script>` element
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Page behaviour: active-section tracking, reveal latches, modal and form
///
/// Mirrors `crate::tracker`: first range containing `scrollY + offset` wins,
/// no match keeps the previous section, reveal latches never reset.
const PAGE_SCRIPT: &str = r#"
(function () {
  var config = JSON.parse(document.getElementById('folio-config').textContent);
  var active = config.initialSection;
  var pending = false;

  function resolve() {
    var y = window.scrollY + config.activationOffset;
    for (var i = 0; i < config.sections.length; i++) {
      var el = document.getElementById(config.sections[i]);
      if (!el) continue;
      var top = el.offsetTop;
      if (y >= top && y < top + el.offsetHeight) return config.sections[i];
    }
    return null;
  }

  function publish(id) {
    document.querySelectorAll('.nav-item').forEach(function (item) {
      var on = item.getAttribute('data-section') === id;
      item.classList.toggle('active', on);
      if (on) item.setAttribute('aria-current', 'true'); else item.removeAttribute('aria-current');
    });
  }

  function onFrame() {
    pending = false;
    try {
      var next = resolve();
      if (next !== null && next !== active) {
        active = next;
        publish(active);
      }
    } catch (e) {
      /* skip this cycle */
    }
  }

  function onScroll() {
    if (!pending) {
      pending = true;
      window.requestAnimationFrame(onFrame);
    }
  }

  window.addEventListener('scroll', onScroll, { passive: true });
  window.addEventListener('pageshow', function (e) {
    if (e.persisted) onScroll();
  });

  var toggle = document.querySelector('.nav-toggle');
  var menu = document.getElementById('nav-menu');
  if (toggle && menu) {
    var setMenu = function (open) {
      menu.classList.toggle('open', open);
      toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    };
    toggle.addEventListener('click', function () { setMenu(!menu.classList.contains('open')); });
    menu.querySelectorAll('a').forEach(function (link) {
      link.addEventListener('click', function () { setMenu(false); });
    });
  }

  document.querySelectorAll('[data-scroll-top]').forEach(function (button) {
    button.addEventListener('click', function () { window.scrollTo({ top: 0, behavior: 'smooth' }); });
  });

  document.querySelectorAll('.project-filters').forEach(function (bar) {
    var grid = bar.nextElementSibling;
    bar.querySelectorAll('[data-filter]').forEach(function (button) {
      button.addEventListener('click', function () {
        var filter = button.getAttribute('data-filter');
        bar.querySelectorAll('[data-filter]').forEach(function (other) {
          var on = other === button;
          other.classList.toggle('active', on);
          other.setAttribute('aria-pressed', on ? 'true' : 'false');
        });
        grid.querySelectorAll('.project-card').forEach(function (card) {
          card.hidden = filter !== 'all' && card.getAttribute('data-category') !== filter;
        });
      });
    });
  });

  document.querySelectorAll('section.reveal').forEach(function (section) {
    var threshold = parseFloat(section.getAttribute('data-reveal-threshold')) || 0;
    var margin = parseFloat(section.getAttribute('data-reveal-margin')) || 0;
    if (!('IntersectionObserver' in window)) {
      section.classList.add('revealed');
      return;
    }
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        var crossed = threshold <= 0 ? entry.intersectionRatio > 0 : entry.intersectionRatio >= threshold;
        if (crossed) {
          section.classList.add('revealed');
          observer.disconnect();
        }
      });
    }, { threshold: threshold, rootMargin: margin + 'px 0px' });
    observer.observe(section);
  });

  var overlay = document.getElementById('scheduling');
  if (overlay) {
    var frame = overlay.querySelector('iframe');
    var setOpen = function (open) {
      overlay.hidden = !open;
      document.body.style.overflow = open ? 'hidden' : '';
      if (open && frame && !frame.src) frame.src = frame.getAttribute('data-src');
    };
    document.querySelectorAll('[data-open-modal]').forEach(function (button) {
      button.addEventListener('click', function () { setOpen(true); });
    });
    var closeOn = (overlay.getAttribute('data-close-on') || '').split(' ');
    var closes = function (event) { return closeOn.indexOf(event) >= 0; };
    overlay.querySelector('[data-close-modal]').addEventListener('click', function () {
      if (closes('close-button')) setOpen(false);
    });
    overlay.addEventListener('mousedown', function (e) {
      if (e.target === overlay ? closes('outside-click') : closes('inside-click')) setOpen(false);
    });
    document.addEventListener('keydown', function (e) {
      if (e.key === 'Escape' && closes('escape')) setOpen(false);
    });
  }

  document.querySelectorAll('form.contact-form').forEach(function (form) {
    var pattern = new RegExp(form.getAttribute('data-email-pattern'), 'i');
    var minMessage = parseInt(form.getAttribute('data-min-message'), 10);
    form.addEventListener('submit', function (e) {
      if (form.getAttribute('data-status') === 'submitting') { e.preventDefault(); return; }
      var errors = {};
      ['name', 'email', 'subject', 'message'].forEach(function (field) {
        var value = form.elements[field].value.trim();
        if (!value) errors[field] = form.elements[field].getAttribute('data-required-message');
      });
      var email = form.elements.email.value.trim();
      if (!errors.email && !pattern.test(email)) {
        errors.email = form.elements.email.getAttribute('data-invalid-message');
      }
      var message = form.elements.message.value;
      if (!errors.message && message.length < minMessage) {
        errors.message = form.elements.message.getAttribute('data-too-short-message');
      }
      form.querySelectorAll('[data-error-for]').forEach(function (slot) {
        slot.textContent = errors[slot.getAttribute('data-error-for')] || '';
      });
      if (Object.keys(errors).length > 0) {
        e.preventDefault();
        form.setAttribute('data-status', 'error');
        return;
      }
      form.setAttribute('data-status', 'submitting');
      window.setTimeout(function () {
        form.setAttribute('data-status', 'success');
        form.querySelector('.form-status').textContent = 'Thanks! Your message is on its way.';
        form.reset();
      }, 0);
    });
  });
})();
"#;

/// Page styles
const CSS_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
                 'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
                 sans-serif;
    line-height: 1.6;
    color: #e5e7eb;
    background: radial-gradient(circle at top, #1e1b4b 0%, #0f172a 60%);
    min-height: 100vh;
}

a {
    color: #818cf8;
    text-decoration: none;
}

a:hover {
    text-decoration: underline;
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 0 24px;
}

.gradient-text {
    background: linear-gradient(135deg, #6366f1, #ec4899);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    font-weight: 700;
}

.navigation {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    background: rgba(15, 23, 42, 0.85);
    backdrop-filter: blur(8px);
}

.nav-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 16px 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-menu {
    display: flex;
    gap: 20px;
    align-items: center;
}

.nav-item {
    color: #cbd5e1;
}

.nav-toggle {
    display: none;
    background: none;
    border: none;
    color: #e2e8f0;
    font-size: 1.5em;
    cursor: pointer;
}

.nav-item.active {
    color: #818cf8;
    border-bottom: 2px solid #6366f1;
}

.nav-resume,
.btn {
    display: inline-block;
    padding: 10px 20px;
    border-radius: 8px;
    border: 1px solid #6366f1;
    color: #e5e7eb;
    background: transparent;
    cursor: pointer;
    font-size: 1em;
}

.btn-primary {
    background: linear-gradient(135deg, #6366f1, #8b5cf6);
    border: none;
}

.section {
    padding: 100px 0 80px;
    min-height: 60vh;
}

.reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}

.reveal.revealed {
    opacity: 1;
    transform: none;
}

.section-header {
    text-align: center;
    margin-bottom: 48px;
}

.section-title {
    font-size: 2.4em;
    font-weight: 700;
}

.section-subtitle,
.page-subtitle {
    color: #94a3b8;
    margin-top: 8px;
}

.section-hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
}

.hero-content {
    text-align: center;
}

.hero-avatar {
    border-radius: 50%;
    max-width: 160px;
    height: auto;
    margin-bottom: 24px;
}

.hero-title {
    font-size: 3.2em;
    font-weight: 800;
}

.hero-role {
    font-size: 1.4em;
    color: #a5b4fc;
}

.hero-actions {
    margin: 32px 0;
    display: flex;
    gap: 16px;
    justify-content: center;
}

.hero-social,
.contact-social,
.footer-social {
    display: flex;
    gap: 16px;
    justify-content: center;
    font-size: 1.4em;
}

.items {
    display: grid;
    gap: 24px;
    margin-bottom: 40px;
}

.items-stat,
.items-certification {
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
}

.items-project,
.items-education,
.items-skill {
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
}

.stat-card,
.project-card,
.experience-card,
.education-card,
.certification,
.skill-category,
.now-card,
.timeline-item {
    background: rgba(30, 41, 59, 0.7);
    border: 1px solid rgba(99, 102, 241, 0.2);
    border-radius: 12px;
    padding: 24px;
}

.stat-card {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.stat-value {
    font-size: 2em;
    font-weight: 700;
}

.stat-label,
.experience-meta,
.education-meta,
.project-meta,
.project-year {
    color: #94a3b8;
}

.progress-bar {
    height: 8px;
    background: rgba(148, 163, 184, 0.2);
    border-radius: 4px;
    overflow: hidden;
    margin: 6px 0 12px;
}

.progress-fill {
    height: 100%;
    background: linear-gradient(90deg, #6366f1, #ec4899);
}

.skill-header,
.proficiency-header {
    display: flex;
    justify-content: space-between;
    gap: 8px;
}

.skill-name {
    flex: 1;
}

.tags {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-top: 12px;
}

.tag {
    font-size: 0.85em;
    padding: 2px 10px;
    border-radius: 999px;
    background: rgba(99, 102, 241, 0.15);
    color: #c7d2fe;
}

ul.achievements,
ul.features,
ul.highlights {
    margin: 12px 0 0 20px;
}

.project-glyph {
    font-size: 2.4em;
}

.project-links {
    display: flex;
    gap: 16px;
    margin-top: 16px;
}

.certification {
    display: flex;
    gap: 16px;
    align-items: center;
}

.contact-grid {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 40px;
}

.contact-info {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.contact-form {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.contact-form input,
.contact-form textarea {
    padding: 12px;
    border-radius: 8px;
    border: 1px solid rgba(148, 163, 184, 0.3);
    background: rgba(15, 23, 42, 0.6);
    color: #e5e7eb;
    font: inherit;
}

.field-error {
    color: #f87171;
    font-size: 0.85em;
    min-height: 1em;
}

.contact-form[data-status="success"] .form-status {
    color: #4ade80;
}

.footer {
    padding: 48px 0;
    border-top: 1px solid rgba(148, 163, 184, 0.15);
    text-align: center;
}

.footer-links {
    display: flex;
    flex-wrap: wrap;
    gap: 20px;
    justify-content: center;
    margin-bottom: 16px;
}

.footer-copy {
    color: #64748b;
    margin-top: 16px;
}

.back-to-top {
    margin-top: 16px;
    width: 40px;
    height: 40px;
    border-radius: 50%;
    border: 1px solid rgba(99, 102, 241, 0.4);
    background: rgba(30, 41, 59, 0.7);
    color: #818cf8;
    cursor: pointer;
}

.project-filters {
    display: flex;
    flex-wrap: wrap;
    gap: 10px;
    justify-content: center;
    margin-bottom: 24px;
}

.project-filters .filter {
    padding: 6px 16px;
    border-radius: 999px;
    border: 1px solid rgba(99, 102, 241, 0.3);
    background: transparent;
    color: #cbd5e1;
    cursor: pointer;
}

.project-filters .filter.active {
    background: #6366f1;
    color: #fff;
}

.project-card[hidden] {
    display: none;
}

.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.7);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.modal-overlay[hidden] {
    display: none;
}

.modal {
    position: relative;
    width: min(900px, 92vw);
    height: min(720px, 88vh);
    background: #fff;
    border-radius: 12px;
    overflow: hidden;
}

.modal-frame {
    width: 100%;
    height: 100%;
    border: none;
}

.modal-close {
    position: absolute;
    top: 8px;
    right: 12px;
    font-size: 1.8em;
    background: none;
    border: none;
    cursor: pointer;
}

.modal-fallback {
    position: absolute;
    bottom: 8px;
    left: 12px;
    font-size: 0.85em;
}

.page {
    padding: 80px 0;
}

.page-title {
    font-size: 2.6em;
    font-weight: 800;
}

.back-link {
    display: inline-block;
    margin-bottom: 24px;
}

.now-section {
    margin-top: 48px;
}

.now-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 20px;
    margin-top: 20px;
}

.project-body {
    margin-top: 32px;
}

.project-body h2 {
    margin: 32px 0 12px;
}

.not-found {
    text-align: center;
}

.error-code {
    font-size: 6em;
    font-weight: 800;
}

.quick-links {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    justify-content: center;
    margin-top: 32px;
}

@media screen and (max-width: 768px) {
    .nav-toggle {
        display: block;
    }

    .nav-menu {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 16px 0;
        background: rgba(15, 23, 42, 0.97);
    }

    .nav-menu.open {
        display: flex;
    }

    .contact-grid {
        grid-template-columns: 1fr;
    }

    .hero-title {
        font-size: 2.2em;
    }
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;
    use crate::content::Icon;
    use crate::site_config::{NowEntry, NowGroup, Owner, SocialLink};
    use crate::site_model::SiteMetadata;
    use crate::tracker::{RevealSettings, SectionDescriptor, TrackerSettings};

    fn section(id: &str, label: &str, layout: SectionLayout) -> PageSection {
        PageSection {
            descriptor: SectionDescriptor::new(id, label),
            title: label.to_string(),
            subtitle: None,
            body_html: None,
            layout,
            nav: true,
            height: 800.0,
            reveal: RevealSettings::default(),
            items: Vec::new(),
        }
    }

    fn project() -> Project {
        Project {
            slug: "eventify".to_string(),
            title: "Eventify".to_string(),
            description: "Event recommendations".to_string(),
            category: Some("web".to_string()),
            technologies: vec!["React".to_string(), "FastAPI".to_string()],
            features: vec!["Reminders".to_string()],
            year: Some("2024".to_string()),
            live_url: None,
            source_url: Some("https://github.com/sam/eventify".to_string()),
            glyph: None,
        }
    }

    fn site() -> Site {
        let mut education = section("education", "Education", SectionLayout::Standard);
        education.nav = false;
        education.reveal = RevealSettings {
            threshold: 0.1,
            margin: -50.0,
        };

        let mut projects = section("projects", "Projects", SectionLayout::Standard);
        projects.items.push(ContentItem::Project(project()));

        Site {
            metadata: SiteMetadata {
                title: "Sam Rivera | Portfolio".to_string(),
                description: "Backend <engineer>".to_string(),
                url: Some("https://sam.dev/".to_string()),
                keywords: vec!["Rust".to_string()],
                owner: Owner {
                    name: "Sam Rivera".to_string(),
                    email: "sam@example.com".to_string(),
                    role: Some("Backend Engineer".to_string()),
                    location: None,
                    phone: None,
                },
                social: vec![SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/sam".to_string(),
                    icon: Icon::Github,
                }],
                scheduling_url: Some("https://calendly.com/sam/intro".to_string()),
                resume_url: None,
            },
            root: PathBuf::from("."),
            avatar: None,
            tracker: TrackerSettings::default(),
            sections: vec![
                section("home", "Home", SectionLayout::Hero),
                section("about", "About", SectionLayout::Standard),
                projects,
                education,
                section("contact", "Contact", SectionLayout::Contact),
            ],
            project_pages: vec![ProjectPage {
                slug: "eventify".to_string(),
                source_path: PathBuf::from("projects/eventify.md"),
                body_html: "<h2>Overview</h2>\n".to_string(),
            }],
            now: Some(NowConfig {
                updated: Some("January 2025".to_string()),
                groups: vec![NowGroup {
                    title: "Current Projects".to_string(),
                    icon: Icon::Code,
                    entries: vec![NowEntry {
                        title: "Portfolio".to_string(),
                        description: "Detail pages".to_string(),
                        progress: Some(85),
                        status: None,
                    }],
                }],
            }),
        }
    }

    fn index() -> String {
        let site = site();
        let sections = site.section_list().unwrap();
        render_index(&site, &sections).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_exactly_one_active_nav_item() {
        let html = index();
        assert_eq!(html.matches("class=\"nav-item active\"").count(), 1);
        assert!(html.contains("class=\"nav-item active\" href=\"#home\""));
    }

    #[test]
    fn test_hidden_from_navigation_but_still_anchored() {
        let html = index();
        assert!(!html.contains("data-section=\"education\""));
        assert!(html.contains("<section id=\"education\""));
    }

    #[test]
    fn test_sections_start_hidden_with_reveal_settings() {
        let html = index();
        assert_eq!(html.matches("class=\"reveal revealed\"").count(), 0);
        assert!(html.contains(
            "<section id=\"education\" class=\"section section-standard reveal\" data-reveal-threshold=\"0.1\" data-reveal-margin=\"-50\">"
        ));
    }

    #[test]
    fn test_tracker_config_lists_every_section_in_order() {
        let html = index();
        assert!(html.contains(
            "\"sections\":[\"home\",\"about\",\"projects\",\"education\",\"contact\"]"
        ));
        assert!(html.contains("\"activationOffset\":100.0"));
    }

    #[test]
    fn test_modal_starts_hidden() {
        let html = index();
        assert!(html.contains(
            "<div class=\"modal-overlay\" id=\"scheduling\" data-close-on=\"escape outside-click close-button\" hidden>"
        ));
        assert!(html.contains("data-open-modal=\"scheduling\""));
    }

    #[test]
    fn test_modal_close_events_match_scheduling_rules() {
        let html = index();
        let start = html.find("data-close-on=\"").unwrap() + "data-close-on=\"".len();
        let end = start + html[start..].find('"').unwrap();
        let rendered: Vec<&str> = html[start..end].split(' ').collect();

        for event in ModalEvent::ALL {
            let mut modal = SchedulingModal::new("https://calendly.com/sam/intro");
            modal.open();
            let closed = !modal.handle(event);
            assert_eq!(rendered.contains(&event.name()), closed, "{:?}", event);
            assert!(PAGE_SCRIPT.contains(&format!("closes('{}')", event.name())));
        }
    }

    #[test]
    fn test_metadata_is_escaped() {
        let html = index();
        assert!(html.contains("content=\"Backend &lt;engineer&gt;\""));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://sam.dev/\">"));
    }

    #[test]
    fn test_project_card_links_to_detail_page() {
        let html = index();
        assert!(html.contains("<a href=\"/projects/eventify/\">Details</a>"));
    }

    #[test]
    fn test_contact_form_rules() {
        let html = index();
        assert!(html.contains("data-min-message=\"10\""));
        assert!(html.contains("action=\"mailto:sam@example.com\""));
    }

    #[test]
    fn test_contact_form_messages_match_validation() {
        let html = index();

        // Every message the browser can show is one `ContactForm::validate` produces
        let errors = ContactForm::default().validate().unwrap_err();
        for error in &errors {
            assert!(html.contains(&format!(
                "id=\"{}\" name=\"{}\"",
                error.field(),
                error.field()
            )));
            assert!(html.contains(&format!(
                "data-required-message=\"{}\"",
                error
            )));
        }

        let bad_email = ContactForm {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            subject: "Hello".to_string(),
            message: "Hi".to_string(),
        };
        for error in bad_email.validate().unwrap_err() {
            let attribute = match error {
                FieldError::InvalidEmail => "data-invalid-message",
                FieldError::MessageTooShort(_) => "data-too-short-message",
                FieldError::Required(_) => unreachable!(),
            };
            assert!(html.contains(&format!("{}=\"{}\"", attribute, error)));
        }

        assert!(html.contains(&format!(
            "data-email-pattern=\"{}\"",
            escape_html(EMAIL_PATTERN)
        )));
        assert!(html.contains(&format!(
            "data-status=\"{}\"",
            SubmissionStatus::Idle.as_str()
        )));
        for status in [
            SubmissionStatus::Submitting,
            SubmissionStatus::Success,
            SubmissionStatus::Error,
        ] {
            assert!(PAGE_SCRIPT.contains(&format!("'{}'", status.as_str())));
        }
        assert!(!PAGE_SCRIPT.contains("is required"));
    }

    #[test]
    fn test_scroll_listener_survives_back_forward_cache() {
        assert!(!PAGE_SCRIPT.contains("removeEventListener('scroll'"));
        assert!(PAGE_SCRIPT.contains("addEventListener('pageshow'"));
        assert!(PAGE_SCRIPT.contains("if (e.persisted) onScroll();"));
    }

    #[test]
    fn test_project_filters_list_distinct_categories() {
        let mut mobile = project();
        mobile.slug = "pocket".to_string();
        mobile.category = Some("mobile".to_string());
        let mut uncategorized = project();
        uncategorized.slug = "notes".to_string();
        uncategorized.category = None;

        let mut output = String::new();
        write_items(
            &mut output,
            &site(),
            &[
                ContentItem::Project(project()),
                ContentItem::Project(mobile),
                ContentItem::Project(project()),
                ContentItem::Project(uncategorized),
            ],
        );

        assert_eq!(output.matches("data-filter=").count(), 3);
        let all = output.find("data-filter=\"all\" aria-pressed=\"true\">All<").unwrap();
        let web = output.find("data-filter=\"web\" aria-pressed=\"false\">Web<").unwrap();
        let mobile = output.find("data-filter=\"mobile\" aria-pressed=\"false\">Mobile<").unwrap();
        let grid = output.find("<div class=\"items items-project\">").unwrap();
        assert!(all < web && web < mobile && mobile < grid);
        assert!(output.contains("data-category=\"\""));
        assert!(PAGE_SCRIPT.contains("card.getAttribute('data-category') !== filter"));
    }

    #[test]
    fn test_no_project_filters_without_categories() {
        let mut plain = project();
        plain.category = None;

        let mut output = String::new();
        write_items(&mut output, &site(), &[ContentItem::Project(plain)]);
        assert!(!output.contains("project-filters"));
    }

    #[test]
    fn test_mobile_menu_toggle_and_back_to_top() {
        let html = index();
        assert!(html.contains("class=\"nav-toggle\" aria-expanded=\"false\" aria-controls=\"nav-menu\""));
        assert!(html.contains("<div class=\"nav-menu\" id=\"nav-menu\">"));
        assert!(html.contains("class=\"back-to-top\" data-scroll-top"));
        assert!(PAGE_SCRIPT.contains("document.querySelector('.nav-toggle')"));
        assert!(PAGE_SCRIPT.contains("document.querySelectorAll('[data-scroll-top]')"));
    }

    #[test]
    fn test_view_my_work_links_to_project_section() {
        let html = index();
        assert!(html.contains("<a class=\"btn btn-secondary\" href=\"#projects\">View My Work</a>"));

        let mut site = site();
        site.sections[2].descriptor = SectionDescriptor::new("work", "Work");
        let sections = site.section_list().unwrap();
        let html = render_index(&site, &sections).unwrap();
        assert!(html.contains("<a class=\"btn btn-secondary\" href=\"#work\">View My Work</a>"));
    }

    #[test]
    fn test_no_view_my_work_without_projects() {
        let mut site = site();
        site.sections.retain(|section| !section.has_projects());
        site.project_pages.clear();
        let sections = site.section_list().unwrap();
        let html = render_index(&site, &sections).unwrap();
        assert!(!html.contains("View My Work"));
        assert!(!html.contains("href=\"#projects\""));
    }

    #[test]
    fn test_skills_grouped_by_category() {
        let skill = |category: &str, name: &str| {
            ContentItem::Skill(Skill {
                category: category.to_string(),
                name: name.to_string(),
                level: 80,
                glyph: None,
            })
        };
        let mut output = String::new();
        write_items(
            &mut output,
            &site(),
            &[
                skill("backend", "Python"),
                skill("devops", "Docker"),
                skill("backend", "FastAPI"),
            ],
        );

        assert_eq!(output.matches("class=\"skill-category\"").count(), 2);
        let backend = output.find(">backend<").unwrap();
        let fastapi = output.find(">FastAPI<").unwrap();
        let devops = output.find(">devops<").unwrap();
        assert!(backend < fastapi && fastapi < devops);
    }

    #[test]
    fn test_now_page() {
        let site = site();
        let html = render_now(&site, site.now.as_ref().unwrap());
        assert!(html.contains("Last updated: January 2025"));
        assert!(html.contains("style=\"width: 85%\""));
        assert!(html.contains("85% Complete"));
    }

    #[test]
    fn test_not_found_links_only_navigable_sections() {
        let html = render_not_found(&site());
        assert!(html.contains("href=\"/#projects\""));
        assert!(!html.contains("href=\"/#education\""));
        assert!(html.contains("href=\"/now/\""));
    }

    #[test]
    fn test_to_html_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let summary = to_html(&site(), dir.path()).unwrap();

        let pages: Vec<String> = summary
            .pages
            .iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            pages,
            vec![
                "index.html",
                "404.html",
                "now/index.html",
                "projects/eventify/index.html"
            ]
        );

        let detail =
            fs::read_to_string(dir.path().join("projects/eventify/index.html")).unwrap();
        assert!(detail.contains("<title>Eventify - Portfolio Project</title>"));
        assert!(detail.contains("<h2>Overview</h2>"));
    }
}
