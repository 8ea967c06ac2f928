//! `portfolio show` command - Show a project's details

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::Workspace;
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Project ID, ID prefix, or short ID (@N)
    pub id: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);
    let repo = ws.repository();
    let id = ws.resolve(&repo, &args.id)?;
    let Some(project) = repo.find(&id) else {
        return Err(miette::miette!("No project found matching '{}'", args.id));
    };

    match ws.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(project).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(project).into_diagnostic()?);
        }
        OutputFormat::Id => {
            println!("{}", project.id);
        }
        _ => {
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: {}", style("ID").bold(), style(&project.id).cyan());
            println!(
                "{}: {}",
                style("Title").bold(),
                style(&project.project_title).yellow()
            );
            println!("{}: {}", style("Student").bold(), project.student_name);
            if !project.date.is_empty() {
                println!("{}: {}", style("Date").bold(), project.date);
            }
            if !project.link.is_empty() {
                println!("{}: {}", style("Link").bold(), project.link);
            }
            println!("{}", style("─".repeat(60)).dim());
            if !project.description.is_empty() {
                println!();
                println!("{}", project.description);
                println!();
            }
        }
    }

    Ok(())
}
