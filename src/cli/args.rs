//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Cradle - create GitHub projects from templates.
#[derive(Debug, Parser)]
#[command(name = "cradle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the template catalog (defaults to ~/.cradle/config.yaml)
    #[arg(short, long, global = true, env = "CRADLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a project from a template (default if no command specified)
    Create(CreateArgs),

    /// List the templates in the catalog
    Templates(TemplatesArgs),

    /// Check that a tool is installed and recent enough
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CreateArgs {
    /// Catalog name, git URL, or local path of the template
    #[arg(short, long)]
    pub template: Option<String>,

    /// Existing project to update instead of creating a new one
    #[arg(short, long)]
    pub dst: Option<PathBuf>,

    /// Git ref of the template to render
    #[arg(long)]
    pub vcs_ref: Option<String>,

    /// Show the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; answer from CRADLE_PROMPT_* variables or defaults
    #[arg(long)]
    pub non_interactive: bool,

    /// Keep the temporary directory of a new project
    #[arg(long)]
    pub keep: bool,
}

/// Arguments for the `templates` command.
#[derive(Debug, Clone, Default, Args)]
pub struct TemplatesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Program to check
    #[arg(long, default_value = "git")]
    pub tool: String,

    /// Minimum version, e.g. 2.28.0 or 2.28
    #[arg(long, default_value = "2.28.0")]
    pub min: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            tool: "git".to_string(),
            min: "2.28.0".to_string(),
            json: false,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
