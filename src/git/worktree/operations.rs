use std::fmt;

use anyhow::{Context, Error};
use git2::{Status, StatusOptions};

use crate::git::repository::core::DotfileRepo;

/// The states `status` reports. Everything else (untracked, ignored,
/// unchanged) is filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Modified,
    Added,
    Deleted,
}

impl FileState {
    pub fn code(self) -> char {
        match self {
            FileState::Modified => 'M',
            FileState::Added => 'A',
            FileState::Deleted => 'D',
        }
    }

    /// Working-tree changes win over staged ones; a path that is only staged
    /// counts as added when HEAD does not have it yet.
    pub fn from_status(status: Status) -> Option<Self> {
        if status.contains(Status::WT_DELETED) {
            Some(FileState::Deleted)
        } else if status.intersects(Status::WT_MODIFIED | Status::WT_TYPECHANGE) {
            Some(FileState::Modified)
        } else if status.contains(Status::INDEX_NEW) {
            Some(FileState::Added)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub path: String,
    pub state: FileState,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.state.code(), self.path)
    }
}

impl DotfileRepo {
    /// Modified, added and deleted files in the shared working directory,
    /// in path order.
    pub fn worktree_status(&self) -> Result<Vec<FileStatus>, Error> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(false)
            .include_ignored(false)
            .exclude_submodules(true);

        let statuses = self
            .repo()
            .statuses(Some(&mut opts))
            .context(format!("Failed to get status for '{}'", self.name()))?;

        Ok(statuses
            .iter()
            .filter_map(|entry| {
                let state = FileState::from_status(entry.status())?;
                let path = entry.path()?.to_string();
                Some(FileStatus { path, state })
            })
            .collect())
    }
}
