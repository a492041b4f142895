use anyhow::Error;
use console::style;

use crate::config::Layout;
use crate::git::DotfileRepo;

pub fn handle_pull(layout: &Layout, repo_name: &str) -> Result<(), Error> {
    let repo = DotfileRepo::open(layout, repo_name)?;
    let outcome = repo.pull()?;

    println!("{} {}", style("✓").green().bold(), outcome);

    Ok(())
}
