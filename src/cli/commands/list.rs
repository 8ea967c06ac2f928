//! `portfolio list` command - List all projects

use console::style;
use miette::Result;

use crate::cli::commands::utils::Workspace;
use crate::cli::table::{is_machine_format, render_projects};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::project::ProjectRecord;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);
    let repo = ws.repository();

    let view = repo.view();
    let mut records: Vec<&ProjectRecord> = view.records();
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    if args.count {
        println!("{}", records.len());
        return Ok(());
    }

    if records.is_empty() {
        match ws.format {
            OutputFormat::Json | OutputFormat::Yaml => println!("[]"),
            f if is_machine_format(f) => {}
            _ => {
                println!("No projects found.");
                println!();
                println!("Add one with: {}", style("portfolio new").yellow());
            }
        }
        return Ok(());
    }

    let mut short_ids = ws.short_ids();
    short_ids.rebuild(records.iter().map(|p| &p.id));
    if let Err(e) = short_ids.save(&ws.short_ids_path()) {
        ws.reporter.detail(format!("Could not save short IDs: {}", e));
    }

    print!("{}", render_projects(&records, &short_ids, ws.format)?);

    if !is_machine_format(ws.format) && !ws.reporter.is_quiet() {
        println!();
        println!("{} project(s) found", style(records.len()).cyan());
    }

    Ok(())
}
