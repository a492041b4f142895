use anyhow::Error;
use console::style;

use crate::config::Layout;
use crate::git::DotfileRepo;

/// Unstage everything, leaving working-directory files as they are.
pub fn handle_undo(layout: &Layout, repo_name: &str) -> Result<(), Error> {
    let repo = DotfileRepo::open(layout, repo_name)?;
    let unstaged = repo.unstage_all()?;

    if unstaged.is_empty() {
        println!("Nothing staged in {repo_name}");
        return Ok(());
    }

    for path in &unstaged {
        println!("  {} {}", style("↩").yellow(), path);
    }
    println!(
        "{} Unstaged {} file(s) in {}",
        style("✓").green().bold(),
        unstaged.len(),
        style(repo_name).cyan()
    );

    Ok(())
}
