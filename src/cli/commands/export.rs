//! `portfolio export` command - Export all projects to CSV

use console::style;
use miette::{IntoDiagnostic, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::cli::commands::utils::Workspace;
use crate::cli::GlobalOpts;
use crate::core::export::{to_csv, write_csv};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output file (default: config `export_file`, else student_projects.csv)
    #[arg(long, short = 'o', conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the CSV to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);
    let repo = ws.repository();

    if args.stdout {
        let csv = to_csv(repo.projects()).map_err(|e| miette::miette!("{}", e))?;
        std::io::stdout()
            .write_all(csv.as_bytes())
            .into_diagnostic()?;
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(ws.config.export_file()));
    write_csv(&path, repo.projects()).map_err(|e| miette::miette!("{}", e))?;

    ws.reporter.success(format!(
        "Exported {} project(s) to {}",
        style(repo.len()).cyan(),
        style(path.display()).cyan()
    ));

    Ok(())
}
