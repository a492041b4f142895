use std::path::PathBuf;

use thiserror::Error;

/// Failures the command layer reports by kind rather than as an opaque
/// git or I/O error.
#[derive(Debug, Error)]
pub enum DotfilesError {
    #[error("cannot derive a repo name from URL '{0}'")]
    InvalidRepoUrl(String),

    #[error("dotfile repo '{name}' not found at {}", .path.display())]
    RepoNotFound { name: String, path: PathBuf },

    #[error("dotfile repo '{name}' already exists at {}", .path.display())]
    RepoAlreadyExists { name: String, path: PathBuf },

    #[error("file {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("file {} is outside the working directory {}", .file.display(), .workdir.display())]
    OutsideWorkdir { file: PathBuf, workdir: PathBuf },

    #[error("GIT_AUTHOR_NAME and GIT_AUTHOR_EMAIL environment variables must exist.")]
    MissingAuthor,

    #[error("verbose listing not implemented.")]
    VerboseListNotImplemented,

    #[error("local branch '{0}' and its remote have diverged; merge manually")]
    DivergedHistory(String),

    #[error("HEAD is not pointing to a branch")]
    DetachedHead,
}
