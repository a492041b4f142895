mod cli;
mod commands;
mod config;
mod error;
mod git;
mod paths;
#[cfg(test)]
mod test_utils;

use std::io;

use anyhow::Error;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Author, Layout};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DOTFILES_LOG";

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // Usage errors share the exit code of every other failure.
            let _ = e.print();
            std::process::exit(1);
        }
    };
    let layout = Layout::from_env();

    if let Err(e) = run(&cli.command, &layout) {
        // Errors go to stdout alongside the rest of the command output.
        println!("{e:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: &Commands, layout: &Layout) -> Result<(), Error> {
    match command {
        Commands::Init { repo_url } => commands::init::handle_init(layout, repo_url),
        Commands::Pull { repo_name } => commands::pull::handle_pull(layout, repo_name),
        Commands::Add { repo_name, file } => commands::add::handle_add(layout, repo_name, file),
        Commands::Save { repo_name, msg } => {
            let author = Author::from_env()?;
            commands::save::handle_save(layout, repo_name, msg, &author)
        }
        Commands::Push { repo_name } => commands::push::handle_push(layout, repo_name),
        Commands::Undo { repo_name } => commands::undo::handle_undo(layout, repo_name),
        Commands::List { verbose } => {
            commands::list::handle_list(layout, *verbose, &mut io::stdout().lock())
        }
        Commands::Status { repo_name } => {
            commands::status::handle_status(layout, repo_name.as_deref(), &mut io::stdout().lock())
        }
    }
}
