//! `portfolio delete` command - Delete a project

use console::style;
use miette::Result;

use crate::cli::commands::utils::Workspace;
use crate::cli::prompt::DraftForm;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Project ID, ID prefix, or short ID (@N)
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);
    let mut repo = ws.repository();
    let Some(id) = ws.lookup(&repo, &args.id)? else {
        ws.reporter.warn(format!(
            "No project found matching '{}', nothing deleted",
            args.id
        ));
        return Ok(());
    };

    if !args.yes && !ws.reporter.is_quiet() {
        let title = repo
            .find(&id)
            .map(|p| p.project_title.clone())
            .unwrap_or_default();
        let prompt = format!("Delete '{}' ({})?", title, id);
        if !DraftForm::new().confirm(&prompt, false)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match repo.delete(&id) {
        Some(removed) => {
            ws.report_write_error(&mut repo);
            ws.reporter.success(format!(
                "Project deleted successfully! {} {}",
                style(&removed.id).cyan(),
                style(&removed.project_title).dim()
            ));
        }
        None => ws.reporter.warn(format!("Project {} was already gone", id)),
    }

    Ok(())
}
