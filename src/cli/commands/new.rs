//! `portfolio new` command - Add a project

use console::style;
use miette::Result;

use crate::cli::commands::utils::Workspace;
use crate::cli::helpers::parse_date;
use crate::cli::prompt::DraftForm;
use crate::cli::GlobalOpts;
use crate::core::repository::SaveOutcome;
use crate::entities::project::ProjectDraft;

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Student name
    #[arg(long, short = 's')]
    pub student: Option<String>,

    /// Project title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<String>,

    /// Project link (URL)
    #[arg(long, short = 'l')]
    pub link: Option<String>,

    /// Fill in the fields interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);
    let mut repo = ws.repository();

    let mut draft = ProjectDraft {
        id: None,
        student_name: args.student.unwrap_or_default(),
        project_title: args.title.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        date: args.date.unwrap_or_default(),
        link: args.link.unwrap_or_default(),
    };

    if args.interactive {
        DraftForm::new().fill(&mut draft)?;
    }

    let outcome = repo.save(draft).map_err(|e| {
        miette::miette!(
            help = "pass --student and --title, or use --interactive",
            "Project not added: {}",
            e
        )
    })?;
    ws.report_write_error(&mut repo);

    if let SaveOutcome::Created(id) = outcome {
        if ws.reporter.is_quiet() {
            println!("{}", id);
        } else {
            ws.reporter
                .success(format!("Project added successfully! {}", style(&id).cyan()));
            ws.reporter.hint(format!("View it with: portfolio show {}", id));
        }
    }

    Ok(())
}
