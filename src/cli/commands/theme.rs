//! `portfolio theme` command - Light/dark preference

use clap::ValueEnum;
use console::style;
use miette::Result;

use crate::cli::commands::utils::Workspace;
use crate::cli::GlobalOpts;
use crate::core::storage::FileStorage;
use crate::core::theme::Theme;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the current preference
    #[default]
    Show,
    /// Switch to dark mode
    Dark,
    /// Switch to light mode
    Light,
    /// Flip between light and dark
    Toggle,
}

#[derive(clap::Args, Debug)]
pub struct ThemeArgs {
    /// What to do with the preference
    #[arg(value_enum, default_value = "show")]
    pub action: ThemeAction,
}

pub fn run(args: ThemeArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global);
    let mut storage = FileStorage::open(&ws.store_path);
    let current = Theme::load(&storage);

    let next = match args.action {
        ThemeAction::Show => {
            println!("{}", current);
            return Ok(());
        }
        ThemeAction::Dark => Theme::Dark,
        ThemeAction::Light => Theme::Light,
        ThemeAction::Toggle => current.toggled(),
    };

    if let Err(e) = next.save(&mut storage) {
        ws.reporter
            .warn(format!("Theme preference was not saved: {}", e));
    }
    ws.reporter
        .success(format!("Theme set to {}", style(next).cyan()));

    Ok(())
}
