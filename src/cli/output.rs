//! Status and diagnostic output
//!
//! Results go to stdout, warnings and verbose detail go to stderr, so piped
//! output stays clean.

use console::style;
use std::fmt::Display;

use crate::cli::GlobalOpts;

#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(global: &GlobalOpts) -> Self {
        Self {
            quiet: global.quiet,
            verbose: global.verbose && !global.quiet,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// `✓ message` on stdout
    pub fn success(&self, message: impl Display) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// `! message` on stderr, shown even in quiet mode
    pub fn warn(&self, message: impl Display) {
        eprintln!("{} {}", style("!").yellow(), message);
    }

    /// Dimmed follow-up line on stdout
    pub fn hint(&self, message: impl Display) {
        if !self.quiet {
            println!("   {}", style(message).dim());
        }
    }

    /// Verbose-only detail on stderr
    pub fn detail(&self, message: impl Display) {
        if self.verbose {
            eprintln!("{} {}", style("·").dim(), style(message).dim());
        }
    }
}
