use std::path::Path;

use anyhow::{Context, Error};
use git2::{ErrorCode, ObjectType, ResetType, Status, StatusOptions};
use tracing::{debug, info};

use crate::config::Author;
use crate::git::repository::core::DotfileRepo;

impl DotfileRepo {
    /// Stage a single path given relative to the working-directory root.
    pub fn stage_path(&self, relative_path: &Path) -> Result<(), Error> {
        let mut index = self
            .repo()
            .index()
            .context("Failed to get repository index")?;

        index
            .add_path(relative_path)
            .context(format!("Failed to stage {}", relative_path.display()))?;

        index.write().context("Failed to write index")?;
        debug!(repo = %self.name(), path = %relative_path.display(), "staged path");

        Ok(())
    }

    /// Paths with staged changes relative to HEAD.
    pub fn staged_paths(&self) -> Result<Vec<String>, Error> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(false).include_ignored(false);

        let statuses = self
            .repo()
            .statuses(Some(&mut opts))
            .context("Failed to get repository status")?;

        let staged = Status::INDEX_NEW
            | Status::INDEX_MODIFIED
            | Status::INDEX_DELETED
            | Status::INDEX_RENAMED
            | Status::INDEX_TYPECHANGE;

        Ok(statuses
            .iter()
            .filter(|entry| entry.status().intersects(staged))
            .filter_map(|entry| entry.path().map(str::to_string))
            .collect())
    }

    /// Commit every modified or deleted tracked file plus anything already
    /// staged. Untracked files are left alone.
    pub fn commit_all(&self, message: &str, author: &Author) -> Result<String, Error> {
        let signature = self
            .create_signature(author)
            .context("Failed to create signature")?;

        let mut index = self
            .repo()
            .index()
            .context("Failed to get repository index")?;

        index
            .update_all(["*"], None)
            .context("Failed to stage modified files")?;
        index.write().context("Failed to write index")?;

        let tree_id = index
            .write_tree()
            .context("Failed to write tree from index")?;

        let tree = self
            .repo()
            .find_tree(tree_id)
            .context("Failed to find tree")?;

        // Get parent commit (if any)
        let parent_commit = match self.repo().head() {
            Ok(head) => Some(head.peel_to_commit().context("Failed to find parent commit")?),
            Err(e) if e.code() == ErrorCode::UnbornBranch => None,
            Err(e) => return Err(Error::new(e).context("Failed to resolve HEAD")),
        };

        let parents: Vec<_> = parent_commit.iter().collect();

        let commit_id = self
            .repo()
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
            .context("Failed to create commit")?;

        info!(repo = %self.name(), commit = %commit_id, "created commit");
        Ok(commit_id.to_string())
    }

    /// Reset the index to HEAD without touching working-tree files.
    /// Returns the paths that were unstaged.
    pub fn unstage_all(&self) -> Result<Vec<String>, Error> {
        let unstaged = self.staged_paths()?;

        match self.repo().head() {
            Ok(head) => {
                let target = head
                    .peel(ObjectType::Commit)
                    .context("Failed to resolve HEAD commit")?;
                self.repo()
                    .reset(&target, ResetType::Mixed, None)
                    .context("Failed to reset index to HEAD")?;
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let mut index = self
                    .repo()
                    .index()
                    .context("Failed to get repository index")?;
                index.clear().context("Failed to clear index")?;
                index.write().context("Failed to write index")?;
            }
            Err(e) => return Err(Error::new(e).context("Failed to resolve HEAD")),
        }

        debug!(repo = %self.name(), count = unstaged.len(), "reset index to HEAD");
        Ok(unstaged)
    }
}
