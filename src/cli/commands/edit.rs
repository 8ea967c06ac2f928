//! `portfolio edit` command - Edit an existing project
//!
//! The record is copied into a draft, the draft is changed from flags or the
//! interactive form, and the draft is then either committed or cancelled.

use console::style;
use miette::Result;

use crate::cli::commands::utils::Workspace;
use crate::cli::helpers::parse_date;
use crate::cli::prompt::DraftForm;
use crate::cli::GlobalOpts;
use crate::core::repository::SaveOutcome;
use crate::entities::project::ProjectDraft;

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Project ID, ID prefix, or short ID (@N)
    pub id: String,

    /// New student name
    #[arg(long, short = 's')]
    pub student: Option<String>,

    /// New project title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New description (empty string clears it)
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// New date (YYYY-MM-DD, empty string clears it)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<String>,

    /// New project link (empty string clears it)
    #[arg(long, short = 'l')]
    pub link: Option<String>,

    /// Edit all fields interactively, starting from the current values
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.student.is_some()
            || self.title.is_some()
            || self.description.is_some()
            || self.date.is_some()
            || self.link.is_some()
    }

    fn apply(&self, draft: &mut ProjectDraft) {
        if let Some(ref v) = self.student {
            draft.student_name = v.clone();
        }
        if let Some(ref v) = self.title {
            draft.project_title = v.clone();
        }
        if let Some(ref v) = self.description {
            draft.description = v.clone();
        }
        if let Some(ref v) = self.date {
            draft.date = v.clone();
        }
        if let Some(ref v) = self.link {
            draft.link = v.clone();
        }
    }
}

pub fn run(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    if !args.interactive && !args.has_changes() {
        return Err(miette::miette!(
            help = "pass at least one of --student, --title, --description, --date, --link, or use --interactive",
            "Nothing to change"
        ));
    }

    let ws = Workspace::open(global);
    let mut repo = ws.repository();
    let id = ws.resolve(&repo, &args.id)?;

    let Some(draft) = repo.begin_edit(&id) else {
        return Err(miette::miette!("No project found matching '{}'", args.id));
    };
    args.apply(draft);

    if args.interactive {
        let form = DraftForm::new();
        form.fill(draft)?;
        if !form.confirm("Save changes?", true)? {
            repo.cancel_edit();
            ws.reporter.success("Edit cancelled, nothing changed");
            return Ok(());
        }
    }

    match repo.commit_edit() {
        Some(Ok(SaveOutcome::Updated(id))) => {
            ws.report_write_error(&mut repo);
            ws.reporter
                .success(format!("Project updated successfully! {}", style(&id).cyan()));
            Ok(())
        }
        Some(Ok(outcome)) => {
            ws.reporter
                .warn(format!("Project {} no longer exists, nothing changed", outcome.id()));
            Ok(())
        }
        Some(Err(e)) => Err(miette::miette!("Project not updated: {}", e)),
        None => Err(miette::miette!("No edit in progress")),
    }
}
