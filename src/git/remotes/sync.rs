use std::fmt;

use anyhow::{Context, Error};
use tracing::{debug, info};

use crate::error::DotfilesError;
use crate::git::remotes::{auth, operations::ORIGIN};
use crate::git::repository::core::DotfileRepo;

/// What a pull did to the current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullOutcome {
    UpToDate,
    FastForward(String),
}

impl fmt::Display for PullOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PullOutcome::UpToDate => write!(f, "Already up-to-date"),
            PullOutcome::FastForward(commit) => write!(f, "Fast-forward pull: {commit}"),
        }
    }
}

impl DotfileRepo {
    /// Fetch one branch into `refs/remotes/<remote>/<branch>`.
    pub fn fetch(&self, remote_name: &str, branch_name: &str) -> Result<(), Error> {
        let mut remote = self
            .repo()
            .find_remote(remote_name)
            .context(format!("Remote '{remote_name}' not found"))?;

        let refspec = format!("+refs/heads/{branch_name}:refs/remotes/{remote_name}/{branch_name}");

        remote
            .fetch(&[&refspec], Some(&mut auth::fetch_options()), None)
            .context(format!("Failed to fetch from remote '{remote_name}'"))?;

        let stats = remote.stats();
        debug!(
            repo = %self.name(),
            received = stats.received_objects(),
            total = stats.total_objects(),
            "fetched"
        );

        Ok(())
    }

    /// Fetch the current branch from origin and fast-forward the branch and
    /// the working directory. Diverged histories are refused; no merge is
    /// attempted.
    pub fn pull(&self) -> Result<PullOutcome, Error> {
        let branch_name = self
            .get_current_branch()
            .context("Failed to get current branch")?;

        self.fetch(ORIGIN, &branch_name)?;

        let remote_ref = format!("refs/remotes/{ORIGIN}/{branch_name}");
        let remote_commit = self
            .repo()
            .find_reference(&remote_ref)
            .and_then(|reference| reference.peel_to_commit())
            .context(format!(
                "Remote branch '{ORIGIN}/{branch_name}' not found after fetch"
            ))?;

        let branch_ref = format!("refs/heads/{branch_name}");
        if let Ok(local_oid) = self.repo().refname_to_id(&branch_ref) {
            if local_oid == remote_commit.id() {
                return Ok(PullOutcome::UpToDate);
            }

            let merge_base = self
                .repo()
                .merge_base(local_oid, remote_commit.id())
                .context("Failed to find merge base")?;

            if merge_base == remote_commit.id() {
                // Local branch is ahead of remote
                return Ok(PullOutcome::UpToDate);
            }
            if merge_base != local_oid {
                return Err(DotfilesError::DivergedHistory(branch_name).into());
            }
        }

        // Update the working directory first so local edits that would be
        // overwritten abort the pull before the branch moves.
        let mut checkout_opts = git2::build::CheckoutBuilder::new();
        checkout_opts.safe();
        self.repo()
            .checkout_tree(remote_commit.as_object(), Some(&mut checkout_opts))
            .context("Failed to checkout remote tree")?;

        self.repo()
            .reference(
                &branch_ref,
                remote_commit.id(),
                true,
                "pull: Fast-forward",
            )
            .context("Failed to update branch reference")?;

        info!(repo = %self.name(), commit = %remote_commit.id(), "fast-forwarded");
        Ok(PullOutcome::FastForward(remote_commit.id().to_string()))
    }
}
