use clap::Parser;
use miette::Result;
use portfolio::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::New(args) => portfolio::cli::commands::new::run(args, &global),
        Commands::List(args) => portfolio::cli::commands::list::run(args, &global),
        Commands::Show(args) => portfolio::cli::commands::show::run(args, &global),
        Commands::Edit(args) => portfolio::cli::commands::edit::run(args, &global),
        Commands::Delete(args) => portfolio::cli::commands::delete::run(args, &global),
        Commands::Search(args) => portfolio::cli::commands::search::run(args, &global),
        Commands::Export(args) => portfolio::cli::commands::export::run(args, &global),
        Commands::Theme(args) => portfolio::cli::commands::theme::run(args, &global),
        Commands::Config(cmd) => portfolio::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => portfolio::cli::commands::completions::run(args),
    }
}
