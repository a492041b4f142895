use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};

/// A bare repository standing in for the dotfiles remote, plus a scratch
/// clone used to push new commits into it.
pub struct TestRemote {
    _dir: assert_fs::TempDir,
    bare_path: PathBuf,
    scratch: Repository,
}

/// Create a bare remote named `remote.git` whose master branch holds one
/// "Initial commit" with the given files.
#[cfg(test)]
pub fn seeded_remote(files: &[(&str, &str)]) -> TestRemote {
    seeded_remote_named("remote", files)
}

#[cfg(test)]
pub fn seeded_remote_named(name: &str, files: &[(&str, &str)]) -> TestRemote {
    let dir = assert_fs::TempDir::new().unwrap();
    let bare_path = dir.path().join(format!("{name}.git"));

    let bare = Repository::init_bare(&bare_path).unwrap();
    bare.set_head("refs/heads/master").unwrap();

    let scratch = Repository::init(dir.path().join("scratch")).unwrap();
    scratch.set_head("refs/heads/master").unwrap();
    scratch
        .remote("origin", bare_path.to_str().unwrap())
        .unwrap();

    let remote = TestRemote {
        _dir: dir,
        bare_path,
        scratch,
    };

    for (path, content) in files {
        remote.write_scratch_file(path, content);
    }
    remote.commit_and_push("Initial commit");

    remote
}

impl TestRemote {
    pub fn url(&self) -> String {
        self.bare_path.to_string_lossy().into_owned()
    }

    pub fn bare_path(&self) -> &Path {
        &self.bare_path
    }

    /// Commit a file on the remote's master branch and return the commit id.
    pub fn commit_file(&self, path: &str, content: &str, message: &str) -> String {
        self.write_scratch_file(path, content);
        self.commit_and_push(message).to_string()
    }

    /// Message of the commit at the tip of `branch` on the remote.
    pub fn head_message(&self, branch: &str) -> String {
        let bare = Repository::open_bare(&self.bare_path).unwrap();
        let oid = bare.refname_to_id(&format!("refs/heads/{branch}")).unwrap();
        let commit = bare.find_commit(oid).unwrap();
        commit.message().unwrap_or("").to_string()
    }

    pub fn assert_branch_at(&self, branch: &str, expected: &str) -> &Self {
        let bare = Repository::open_bare(&self.bare_path).unwrap();
        let actual = bare
            .refname_to_id(&format!("refs/heads/{branch}"))
            .unwrap_or_else(|e| panic!("Remote branch '{branch}' missing: {e}"));
        if actual.to_string() != expected {
            panic!("Remote branch '{branch}' mismatch. Expected: '{expected}', Found: '{actual}'");
        }
        self
    }

    fn write_scratch_file(&self, path: &str, content: &str) {
        let workdir = self.scratch.workdir().unwrap();
        let file_path = workdir.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(file_path, content).unwrap();

        let mut index = self.scratch.index().unwrap();
        index.add_path(Path::new(path)).unwrap();
        index.write().unwrap();
    }

    fn commit_and_push(&self, message: &str) -> Oid {
        let signature = Signature::now("Remote User", "remote@example.com").unwrap();
        let mut index = self.scratch.index().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.scratch.find_tree(tree_id).unwrap();

        let parent = self
            .scratch
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();

        let oid = self
            .scratch
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .unwrap();

        let mut origin = self.scratch.find_remote("origin").unwrap();
        origin
            .push(&["refs/heads/master:refs/heads/master"], None)
            .unwrap();

        oid
    }
}

#[cfg(test)]
mod tests {
    use super::seeded_remote;

    #[test]
    fn seeded_remote_has_initial_commit() {
        let remote = seeded_remote(&[("README.md", "hello")]);

        assert!(remote.bare_path().join("HEAD").exists());
        assert_eq!(remote.head_message("master"), "Initial commit");
    }

    #[test]
    fn commit_file_advances_remote_branch() {
        let remote = seeded_remote(&[("README.md", "hello")]);

        let oid = remote.commit_file("notes/todo.txt", "x", "Add todo");

        remote.assert_branch_at("master", &oid);
        assert_eq!(remote.head_message("master"), "Add todo");
    }
}
