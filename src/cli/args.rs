//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs,
    config::ConfigCommands,
    delete::DeleteArgs,
    edit::EditArgs,
    export::ExportArgs,
    list::ListArgs,
    new::NewArgs,
    search::SearchArgs,
    show::ShowArgs,
    theme::ThemeArgs,
};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(author, version, about = "Student Portfolio Manager")]
#[command(long_about = "Manage a catalog of student project records kept in local storage.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Output format (default: config `default_format`, else auto)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Storage file (default: config `store`, else the user data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new project
    New(NewArgs),

    /// List all projects
    List(ListArgs),

    /// Show a project's details
    Show(ShowArgs),

    /// Edit an existing project
    Edit(EditArgs),

    /// Delete a project
    Delete(DeleteArgs),

    /// Search projects by student name or title
    Search(SearchArgs),

    /// Export all projects to CSV
    Export(ExportArgs),

    /// Show or change the light/dark theme preference
    Theme(ThemeArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (table for lists, details for show)
    #[default]
    Auto,
    /// Aligned columns (for reading)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// YAML format (full fidelity)
    Yaml,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

impl OutputFormat {
    /// Parse a format name from configuration (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}
