//! folio - Static portfolio site generator
//!
//! A CLI tool for building single-page portfolio sites from a folio.toml
//! description, Markdown project pages and CSV skill lists.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::enum_variant_names)]
#![allow(dead_code)]

mod cli;
mod site_config;
mod templates;

// Site content and behaviour
mod contact;
mod content;
mod scheduling;
mod simulation;
mod tracker;

// Three-stage pipeline modules
mod pipeline;
mod site_model;
mod validation;

// HTML exporter
mod html_exporter;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use simulation::SimulationEvent;
use site_config::CONFIG_FILE_NAME;
use site_model::Site;
use std::path::{Path, PathBuf};
use tracker::ScrollOutcome;

/// Main entry point for the folio CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            path,
            template,
            force,
            name,
        } => {
            init_logging(false);
            handle_init_command(path, &template, force, name)?;
        }

        Commands::Build {
            input,
            output,
            verbose,
        } => {
            init_logging(verbose);
            handle_build_command(&input, &output, verbose)?;
        }

        Commands::Validate { input, verbose } => {
            init_logging(verbose);
            handle_validate_command(&input)?;
        }

        Commands::Simulate {
            input,
            scroll,
            viewport_height,
            verbose,
        } => {
            init_logging(verbose);
            handle_simulate_command(&input, &scroll, viewport_height)?;
        }

        Commands::Sections { input } => {
            init_logging(false);
            handle_sections_command(&input)?;
        }

        Commands::ListTemplates => {
            handle_list_templates_command();
        }
    }

    Ok(())
}

/// Initialize logging; `-v` forces Info, otherwise `RUST_LOG` decides
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Handle the init command
fn handle_init_command(
    path: Option<PathBuf>,
    template: &str,
    force: bool,
    name: Option<String>,
) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));

    // Look up the template
    let template_info = templates::get_template(template).with_context(|| {
        format!(
            "Template '{}' not found. Run 'folio list-templates' to see available templates",
            template
        )
    })?;

    let mut config = templates::parse_template(&template_info)
        .with_context(|| format!("Failed to parse template '{}'", template))?;

    println!("Initializing site from template: {}", template_info.id);
    println!("Target path: {}", target_path.display());
    if let Some(ref owner) = name {
        println!("Owner: {}", owner);
        templates::apply_owner_name(&mut config, owner);
    }

    // Create the target directory if it doesn't exist
    if !target_path.exists() {
        std::fs::create_dir_all(&target_path)
            .with_context(|| format!("Failed to create directory {}", target_path.display()))?;
    }

    // Check if directory is empty (unless force flag is set)
    if !force {
        check_directory_empty(&target_path)?;
    }

    let config_path = target_path.join(CONFIG_FILE_NAME);
    config
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    for (file_path, content) in &template_info.files {
        create_single_file(&target_path, file_path, content)
            .with_context(|| format!("Failed to create file {}", file_path))?;
    }

    println!(
        "\n✓ Successfully created {} files",
        templates::template_files(&template_info).len()
    );
    println!("\nNext steps:");
    println!("  1. Edit folio.toml to describe yourself and your work");
    println!("  2. Add project write-ups under projects/<slug>.md");
    println!("  3. Run 'folio build' to generate the site");

    Ok(())
}

/// Handle the build command
fn handle_build_command(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    println!("Building site...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    // Stage 1: Load all source files
    println!("\n[Stage 1/3] Loading sources...");
    let sources = pipeline::load_sources(input)
        .with_context(|| format!("Failed to load site from {}", input.display()))?;

    println!(
        "✓ Loaded {} sections and {} project pages",
        sources.config.sections.len(),
        sources.project_sources.len()
    );

    // Stage 2: Assemble and validate
    println!("\n[Stage 2/3] Assembling site...");
    let site = pipeline::assemble(sources);
    validation::validate(&site).context("Site validation failed")?;

    println!("✓ Assembled {} sections", site.sections.len());
    if verbose {
        println!("  - {} content items", site.item_count());
        println!("  - {} projects", site.projects().count());
        println!("  - {} detail pages", site.project_pages.len());
        println!(
            "  - avatar: {}",
            if site.avatar.is_some() { "embedded" } else { "none" }
        );
    }

    // Stage 3: Export
    println!("\n[Stage 3/3] Exporting to HTML...");
    let summary = pipeline::export::to_html(&site, output)
        .with_context(|| format!("Failed to export HTML to {}", output.display()))?;

    println!(
        "✓ Wrote {} pages to {}",
        summary.pages.len(),
        output.display()
    );
    if verbose {
        for page in &summary.pages {
            println!("  - {}", page.display());
        }
    }

    Ok(())
}

/// Handle the validate command
fn handle_validate_command(input: &Path) -> Result<()> {
    println!("Validating site: {}", input.display());

    let site = load_site(input)?;
    let errors = validation::collect_errors(&site);

    if errors.is_empty() {
        println!(
            "✓ {} sections, {} content items, no problems found",
            site.sections.len(),
            site.item_count()
        );
        return Ok(());
    }

    for error in &errors {
        println!("  ✗ {}", error);
    }
    anyhow::bail!("{} validation error(s) found", errors.len());
}

/// Handle the simulate command
fn handle_simulate_command(input: &Path, scroll: &str, viewport_height: f64) -> Result<()> {
    let offsets = simulation::parse_offsets(scroll).map_err(anyhow::Error::msg)?;
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        anyhow::bail!("Viewport height must be positive, got {}", viewport_height);
    }

    let site = load_site(input)?;
    let report = simulation::simulate(&site, &offsets, viewport_height)
        .context("Failed to set up the section tracker")?;

    println!(
        "Simulating {} scroll offsets (activation offset {}, viewport {})",
        offsets.len(),
        site.tracker.activation_offset,
        viewport_height
    );
    println!("Initial section: {}\n", site.tracker.initial_section);

    for event in &report.events {
        match event {
            SimulationEvent::Scroll {
                scroll_y,
                outcome,
                active,
            } => match outcome {
                ScrollOutcome::Changed(id) => println!("  y={:<8} active -> {}", scroll_y, id),
                ScrollOutcome::Unchanged => println!("  y={:<8} active    {}", scroll_y, active),
                ScrollOutcome::NoMatch => {
                    println!("  y={:<8} no match, keeping {}", scroll_y, active)
                }
                ScrollOutcome::Skipped => println!("  y={:<8} skipped", scroll_y),
                ScrollOutcome::Unmounted => println!("  y={:<8} ignored (unmounted)", scroll_y),
            },
            SimulationEvent::Revealed { scroll_y, section } => {
                println!("  y={:<8} revealed  {}", scroll_y, section)
            }
        }
    }

    println!("\nFinal active section: {}", report.final_active);
    if !report.hidden.is_empty() {
        let hidden: Vec<&str> = report.hidden.iter().map(|id| id.as_str()).collect();
        println!("Still hidden: {}", hidden.join(", "));
    }

    Ok(())
}

/// Handle the sections command
fn handle_sections_command(input: &Path) -> Result<()> {
    let site = load_site(input)?;

    for (index, section) in site.sections.iter().enumerate() {
        let marker = if section.descriptor.id == site.tracker.initial_section {
            "*"
        } else {
            " "
        };
        println!(
            "{}{:>2}. {:<16} {:<16} height {:<6} reveal {}{}",
            marker,
            index + 1,
            section.id(),
            section.descriptor.label,
            section.height,
            section.reveal.threshold,
            if section.nav { "" } else { "  (not in navigation)" }
        );
    }

    Ok(())
}

/// Handle the list-templates command
fn handle_list_templates_command() {
    println!("Available site templates:\n");

    for template in templates::get_all_templates() {
        println!("  {} - {}", template.id, template.description);
        println!("    Files: {}", templates::template_files(&template).join(", "));
        println!();
    }

    println!("Usage: folio init --template <template> [path]");
    println!("Example: folio init --template starter ./my-portfolio");
}

/// Load and assemble a site without exporting it
fn load_site(input: &Path) -> Result<Site> {
    let sources = pipeline::load_sources(input)
        .with_context(|| format!("Failed to load site from {}", input.display()))?;
    Ok(pipeline::assemble(sources))
}

/// Check if a directory is empty
fn check_directory_empty(path: &Path) -> Result<()> {
    if let Ok(entries) = std::fs::read_dir(path) {
        if entries.count() > 0 {
            anyhow::bail!("Target directory is not empty. Use --force to overwrite existing files");
        }
    }
    Ok(())
}

/// Create a single template file, creating parent directories as needed
fn create_single_file(target_path: &Path, file_path: &str, content: &str) -> Result<()> {
    let full_path = target_path.join(file_path);

    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&full_path, content)
        .with_context(|| format!("Failed to write {}", full_path.display()))?;

    println!("  Created: {}", file_path);
    Ok(())
}
