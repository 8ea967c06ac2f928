//! `portfolio search` command - Search projects
//!
//! Matches the query as a case-insensitive substring of the student name or
//! the project title. A blank query is not a search at all and shows nothing.

use console::style;
use miette::Result;

use crate::cli::commands::utils::Workspace;
use crate::cli::table::{is_machine_format, render_projects};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::search::SearchOutcome;

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Search term (matched against student name and project title)
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);
    let mut repo = ws.repository();

    repo.change_search(&args.query);
    let mut results = match repo.submit_search(args.query.as_str()) {
        SearchOutcome::Inactive => {
            ws.reporter.warn(format!(
                "Empty search term, nothing to show. Use {} to see every project.",
                style("portfolio list").yellow()
            ));
            return Ok(());
        }
        SearchOutcome::Matches(found) => found,
    };

    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    if args.count {
        println!("{}", results.len());
        return Ok(());
    }

    if results.is_empty() {
        match ws.format {
            OutputFormat::Json | OutputFormat::Yaml => println!("[]"),
            f if is_machine_format(f) => {}
            _ => println!("No matching projects found for '{}'.", style(&args.query).yellow()),
        }
        return Ok(());
    }

    let mut short_ids = ws.short_ids();
    short_ids.rebuild(results.iter().map(|p| &p.id));
    if let Err(e) = short_ids.save(&ws.short_ids_path()) {
        ws.reporter.detail(format!("Could not save short IDs: {}", e));
    }

    if !is_machine_format(ws.format) && !ws.reporter.is_quiet() {
        println!(
            "Search Results ({}) for '{}':",
            style(results.len()).cyan(),
            style(&args.query).yellow()
        );
        println!();
    }

    print!("{}", render_projects(&results, &short_ids, ws.format)?);

    Ok(())
}
