use std::path::Path;

use anyhow::{Context, Error};
use git2::Sort;

use crate::{config::Layout, git::DotfileRepo};

/// Layout rooted in a fresh temporary directory; neither directory exists yet.
#[cfg(test)]
pub fn temp_layout() -> (assert_fs::TempDir, Layout) {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let layout = Layout::new(
        temp_dir.path().join("dotfiles"),
        temp_dir.path().join("workdir"),
    );
    (temp_dir, layout)
}

/// Test-only trait that adds assertion methods to DotfileRepo
#[cfg(test)]
pub trait RepoAssertions {
    /// Assert that a working-directory file exists with the given content
    fn assert_workdir_file(&self, path: &str, expected: &str) -> &Self;

    /// Assert that commit messages match the expected order (newest first)
    fn assert_commit_messages(&self, expected_messages: &[&str]) -> &Self;

    /// Assert that the HEAD tree holds `path` with the given content
    fn assert_head_contains(&self, path: &str, expected: &str) -> &Self;

    /// Assert that the HEAD tree has no entry for `path`
    fn assert_head_lacks(&self, path: &str) -> &Self;
}

/// Test-only trait for editing the shared working directory
#[cfg(test)]
pub trait WorkdirOperations {
    /// Write a file relative to the working directory, creating parents (fluent)
    fn write_workdir_file(&self, path: &str, content: &str) -> Result<&Self, Error>;
}

#[cfg(test)]
impl RepoAssertions for DotfileRepo {
    fn assert_workdir_file(&self, path: &str, expected: &str) -> &Self {
        let file_path = self.workdir().join(path);
        let actual = std::fs::read_to_string(&file_path)
            .unwrap_or_else(|e| panic!("Expected file '{path}' to exist at path: {file_path:?}: {e}"));
        if actual != expected {
            panic!("File '{path}' content mismatch. Expected: '{expected}', Found: '{actual}'");
        }
        self
    }

    fn assert_commit_messages(&self, expected_messages: &[&str]) -> &Self {
        let mut revwalk = self.repo().revwalk().unwrap();
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME).unwrap();
        revwalk.push_head().unwrap();

        let messages: Vec<String> = revwalk
            .map(|oid| {
                let commit = self.repo().find_commit(oid.unwrap()).unwrap();
                commit.message().unwrap_or("").to_string()
            })
            .collect();

        if messages != expected_messages {
            panic!("Commit messages mismatch. Expected: {expected_messages:?}, Found: {messages:?}");
        }
        self
    }

    fn assert_head_contains(&self, path: &str, expected: &str) -> &Self {
        let tree = self.repo().head().unwrap().peel_to_tree().unwrap();
        let entry = tree
            .get_path(Path::new(path))
            .unwrap_or_else(|e| panic!("Expected '{path}' in HEAD tree: {e}"));
        let blob = self.repo().find_blob(entry.id()).unwrap();
        let actual = String::from_utf8_lossy(blob.content());
        if actual != expected {
            panic!("HEAD '{path}' content mismatch. Expected: '{expected}', Found: '{actual}'");
        }
        self
    }

    fn assert_head_lacks(&self, path: &str) -> &Self {
        let tree = self.repo().head().unwrap().peel_to_tree().unwrap();
        if tree.get_path(Path::new(path)).is_ok() {
            panic!("Expected '{path}' to be absent from HEAD tree");
        }
        self
    }
}

#[cfg(test)]
impl WorkdirOperations for DotfileRepo {
    fn write_workdir_file(&self, path: &str, content: &str) -> Result<&Self, Error> {
        let file_path = self.workdir().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create parent of '{path}'"))?;
        }
        std::fs::write(&file_path, content).context(format!("Failed to write '{path}'"))?;
        Ok(self)
    }
}
