//! `portfolio config` command - Configuration inspection
//!
//! Shows the effective configuration after all layers are applied.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::Workspace;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show,

    /// Show paths to the configuration and storage files
    Path,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Path => run_path(global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);
    let effective = Config {
        store: Some(ws.store_path.clone()),
        default_format: Some(format!("{:?}", ws.format).to_lowercase()),
        export_file: Some(ws.config.export_file()),
    };

    match ws.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&effective).into_diagnostic()?);
        }
        _ => {
            print!("{}", serde_yml::to_string(&effective).into_diagnostic()?);
        }
    }

    Ok(())
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);

    match Config::global_config_path() {
        Some(path) => {
            let marker = if path.exists() {
                style("(exists)").green()
            } else {
                style("(not found)").dim()
            };
            println!("{}: {} {}", style("config").bold(), path.display(), marker);
        }
        None => println!("{}: {}", style("config").bold(), style("unavailable").dim()),
    }
    println!(
        "{}: {}",
        style("storage").bold(),
        ws.store_path.display()
    );
    println!(
        "{}: {}",
        style("short ids").bold(),
        ws.short_ids_path().display()
    );

    Ok(())
}
