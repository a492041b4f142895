use std::path::Path;

use anyhow::Error;
use console::style;

use crate::config::Layout;
use crate::error::DotfilesError;
use crate::git::DotfileRepo;
use crate::paths::relative_to_workdir;

/// Stage `file`, which must live inside the shared working directory.
pub fn handle_add(layout: &Layout, repo_name: &str, file: &Path) -> Result<(), Error> {
    println!("Adding {} to {}", file.display(), repo_name);

    if !file.is_file() {
        return Err(DotfilesError::FileNotFound(file.to_path_buf()).into());
    }

    let relative_path = relative_to_workdir(file, layout.workdir())?;
    let repo = DotfileRepo::open(layout, repo_name)?;
    repo.stage_path(&relative_path)?;

    println!(
        "{} Staged {}",
        style("✓").green().bold(),
        style(relative_path.display()).cyan()
    );

    Ok(())
}
