use anyhow::{Context, Error};

use crate::error::DotfilesError;
use crate::git::repository::core::DotfileRepo;

impl DotfileRepo {
    pub fn get_head_symbolic_target(&self) -> Result<String, Error> {
        let head_ref = self
            .repo()
            .find_reference("HEAD")
            .context("Failed to find HEAD reference")?;

        match head_ref.symbolic_target() {
            Some(target) => Ok(target.to_string()),
            None => Err(DotfilesError::DetachedHead.into()),
        }
    }

    /// Get the current branch name
    pub fn get_current_branch(&self) -> Result<String, Error> {
        let head_target = self
            .get_head_symbolic_target()
            .context("Failed to get current branch from HEAD")?;

        // Extract branch name from "refs/heads/branch_name"
        let branch_name = head_target
            .strip_prefix("refs/heads/")
            .ok_or(DotfilesError::DetachedHead)?;

        Ok(branch_name.to_string())
    }
}
