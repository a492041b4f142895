use std::io::Write;

use anyhow::{Context, Error};
use tracing::debug;

use crate::config::Layout;
use crate::git::DotfileRepo;

/// Print per-file status for one repo, or for every repo in the base
/// directory when no name is given. Stops at the first repo that fails.
pub fn handle_status<W: Write>(
    layout: &Layout,
    repo_name: Option<&str>,
    out: &mut W,
) -> Result<(), Error> {
    let repo_names = match repo_name {
        Some(name) => vec![name.to_string()],
        None => layout.repo_names()?,
    };
    debug!(count = repo_names.len(), "showing status");

    for name in &repo_names {
        writeln!(out, "{name}:").context("Failed to write status")?;

        let repo = DotfileRepo::open(layout, name)?;
        for file_status in repo.worktree_status()? {
            writeln!(out, "{file_status}").context("Failed to write status")?;
        }
    }

    Ok(())
}
