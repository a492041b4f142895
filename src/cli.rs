use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dotfiles")]
#[command(about = "A program for working with dotfile git repos.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Use a new dotfiles repo
    Init {
        /// URL of dotfile repo to use
        repo_url: String,
    },
    /// Pull changes from the remote dotfile repo
    Pull {
        /// Name of dotfile repo to pull from
        repo_name: String,
    },
    /// Add a file to the repo staging index
    Add {
        /// Name of dotfile repo to stage to
        repo_name: String,
        /// Path of a file to add to the dotfile repo
        file: PathBuf,
    },
    /// Save all modified and added files by committing and pushing to the remote dotfile repo
    Save {
        /// Name of dotfile repo to save changes for
        repo_name: String,
        /// Message describing the changes to the files
        msg: String,
    },
    /// Push committed changes to the remote dotfile repo without committing
    Push {
        /// Name of dotfile repo to push
        repo_name: String,
    },
    /// Undo staged changes for a dotfile repo
    Undo {
        /// Name of dotfile repo to undo changes for
        repo_name: String,
    },
    /// List the dotfile repos in use
    List {
        /// List all repo information
        #[arg(long)]
        verbose: bool,
    },
    /// Show the status of files for the dotfile repo
    Status {
        /// Name of dotfile repo to show status for; all repos when omitted
        repo_name: Option<String>,
    },
}
