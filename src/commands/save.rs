use anyhow::Error;
use console::style;

use crate::config::{Author, Layout};
use crate::git::DotfileRepo;

/// Commit every modified or staged file and push the branch to origin.
///
/// A failed push leaves the new commit in the local repository.
pub fn handle_save(layout: &Layout, repo_name: &str, msg: &str, author: &Author) -> Result<(), Error> {
    let repo = DotfileRepo::open(layout, repo_name)?;

    let commit_id = repo.commit_all(msg, author)?;
    println!(
        "{} Committed {}",
        style("✓").green().bold(),
        style(&commit_id[..7]).yellow()
    );

    let branch = repo.push_to_origin()?;
    println!(
        "{} Pushed {} to origin",
        style("✓").green().bold(),
        style(branch).cyan()
    );

    Ok(())
}
