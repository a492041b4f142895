use anyhow::Error;
use console::style;

use crate::config::Layout;
use crate::git::DotfileRepo;

pub fn handle_push(layout: &Layout, repo_name: &str) -> Result<(), Error> {
    let repo = DotfileRepo::open(layout, repo_name)?;
    let branch = repo.push_to_origin()?;

    println!(
        "{} Pushed {} to origin",
        style("✓").green().bold(),
        style(branch).cyan()
    );

    Ok(())
}
