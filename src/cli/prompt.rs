//! Interactive draft form
//!
//! Walks the user through every field of a draft, pre-filled with the
//! draft's current values, the way the add/edit form does.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::parse_date;
use crate::entities::project::ProjectDraft;

pub struct DraftForm {
    theme: ColorfulTheme,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftForm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Prompt for every field, starting from the draft's current values
    pub fn fill(&self, draft: &mut ProjectDraft) -> Result<()> {
        let heading = if draft.id.is_some() {
            "Update project"
        } else {
            "Add project"
        };
        println!();
        println!("{} {}", style("◆").cyan(), style(heading).bold());
        println!("{}", style("─".repeat(50)).dim());

        draft.student_name = self.required("Student Name", &draft.student_name)?;
        draft.project_title = self.required("Project Title", &draft.project_title)?;
        draft.description = self.optional("Description", &draft.description)?;
        draft.date = Input::<String>::with_theme(&self.theme)
            .with_prompt("Date (YYYY-MM-DD)")
            .with_initial_text(draft.date.clone())
            .allow_empty(true)
            .validate_with(|input: &String| parse_date(input).map(|_| ()))
            .interact_text()
            .into_diagnostic()
            .and_then(|d| parse_date(&d).map_err(|e| miette::miette!("{}", e)))?;
        draft.link = self.optional("Project Link", &draft.link)?;

        Ok(())
    }

    /// Yes/no question
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .into_diagnostic()
    }

    fn required(&self, prompt: &str, initial: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err(format!("{} is required", prompt))
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .into_diagnostic()
    }

    fn optional(&self, prompt: &str, initial: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()
    }
}
