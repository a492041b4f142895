use std::env;
use std::path::{Path, PathBuf};

use crate::error::DotfilesError;

pub const DEFAULT_BASEDIR: &str = "./dotfiles";
pub const DEFAULT_WORKDIR: &str = "./workdir";

const BASEDIR_ENV: &str = "DOTFILES_BASEDIR";
const WORKDIR_ENV: &str = "DOTFILES_WORKDIR";
const AUTHOR_NAME_ENV: &str = "GIT_AUTHOR_NAME";
const AUTHOR_EMAIL_ENV: &str = "GIT_AUTHOR_EMAIL";

/// Where the bare repositories and the shared working tree live.
///
/// Every command receives the layout explicitly, so nothing in the crate
/// reads the process-wide defaults except [`Layout::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    basedir: PathBuf,
    workdir: PathBuf,
}

impl Layout {
    pub fn new<B: Into<PathBuf>, W: Into<PathBuf>>(basedir: B, workdir: W) -> Self {
        Self {
            basedir: basedir.into(),
            workdir: workdir.into(),
        }
    }

    /// Defaults, overridden by `DOTFILES_BASEDIR` / `DOTFILES_WORKDIR` when set
    /// to a non-empty value.
    pub fn from_env() -> Self {
        let basedir = non_empty_var(BASEDIR_ENV).unwrap_or_else(|| DEFAULT_BASEDIR.to_string());
        let workdir = non_empty_var(WORKDIR_ENV).unwrap_or_else(|| DEFAULT_WORKDIR.to_string());
        Self::new(basedir, workdir)
    }

    pub fn basedir(&self) -> &Path {
        &self.basedir
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_BASEDIR, DEFAULT_WORKDIR)
    }
}

/// Commit author for `save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new<N: Into<String>, E: Into<String>>(name: N, email: E) -> Result<Self, DotfilesError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(DotfilesError::MissingAuthor);
        }
        Ok(Self { name, email })
    }

    pub fn from_env() -> Result<Self, DotfilesError> {
        Self::new(
            env::var(AUTHOR_NAME_ENV).unwrap_or_default(),
            env::var(AUTHOR_EMAIL_ENV).unwrap_or_default(),
        )
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
