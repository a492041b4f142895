use anyhow::{Context, Error};
use tracing::info;

use crate::git::remotes::auth;
use crate::git::repository::core::DotfileRepo;

/// The remote every dotfile repo is cloned from.
pub const ORIGIN: &str = "origin";

impl DotfileRepo {
    /// Push a branch to remote (equivalent to `git push <remote> <branch>`)
    pub fn push(&self, remote_name: &str, branch_name: &str) -> Result<(), Error> {
        let mut remote = self
            .repo()
            .find_remote(remote_name)
            .context(format!("Failed to find remote '{remote_name}'"))?;

        let refspec = format!("refs/heads/{branch_name}:refs/heads/{branch_name}");

        info!(repo = %self.name(), remote = remote_name, branch = branch_name, "pushing");
        remote
            .push(&[&refspec], Some(&mut auth::push_options()))
            .context(format!(
                "Failed to push branch '{branch_name}' to remote '{remote_name}'"
            ))?;

        Ok(())
    }

    /// Push the current HEAD branch to origin and return its name.
    pub fn push_to_origin(&self) -> Result<String, Error> {
        let branch_name = self
            .get_current_branch()
            .context("Failed to get current branch from HEAD")?;

        self.push(ORIGIN, &branch_name)?;

        Ok(branch_name)
    }
}
