use anyhow::Error;
use console::style;

use crate::config::Layout;
use crate::git::DotfileRepo;
use crate::paths::repo_name_from_url;

/// Clone a remote dotfile repo as `basedir/<name>.git` and check it out into
/// the shared working directory.
pub fn handle_init(layout: &Layout, repo_url: &str) -> Result<(), Error> {
    println!("Initialising repo {repo_url}");

    let name = repo_name_from_url(repo_url)?;
    println!("Repo basename = {name}");
    println!("Repo basepath = {}", layout.bare_path(&name).display());
    println!("Workdir = {}", layout.workdir().display());

    let repo = DotfileRepo::clone_bare(layout, repo_url)?;

    println!(
        "{} Checked out {} ({}) into {}",
        style("✓").green().bold(),
        style(repo.name()).cyan(),
        repo.bare_path().display(),
        repo.workdir().display()
    );

    Ok(())
}
