//! Command-line interface definitions for folio

use crate::simulation::DEFAULT_VIEWPORT_HEIGHT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the folio application
#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Static portfolio site generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for folio
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new site from a built-in template
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Template identifier (see `folio list-templates`)
        #[arg(short, long, default_value = "starter")]
        template: String,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Owner name written into folio.toml
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Build the site to static HTML pages
    Build {
        /// Site directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate the site configuration without building
    Validate {
        /// Site directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Replay scroll offsets and print active-section changes and reveals
    Simulate {
        /// Site directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Comma-separated scroll offsets, e.g. "0,750,1500"
        #[arg(short, long, value_name = "Y,...")]
        scroll: String,

        /// Height of the simulated viewport
        #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
        viewport_height: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the page sections in order
    Sections {
        /// Site directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,
    },

    /// List available site templates
    ListTemplates,
}
