//! Naming and path conventions that map repo names and user-supplied files
//! onto the on-disk layout.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Error};

use crate::config::Layout;
use crate::error::DotfilesError;

const BARE_SUFFIX: &str = ".git";

/// Derive a repo name from the final path segment of a remote URL.
///
/// Handles scp-like URLs (`git@host:user/repo.git`), plain paths and URLs with
/// trailing slashes. One trailing `.git` is removed.
pub fn repo_name_from_url(url: &str) -> Result<String, DotfilesError> {
    let trimmed = url.trim().trim_end_matches('/');
    let segment = trimmed
        .rsplit(|c: char| c == '/' || c == ':')
        .next()
        .unwrap_or_default();
    let name = segment.strip_suffix(BARE_SUFFIX).unwrap_or(segment);

    if name.is_empty() || name == "." || name == ".." {
        return Err(DotfilesError::InvalidRepoUrl(url.to_string()));
    }

    Ok(name.to_string())
}

impl Layout {
    /// `basedir/<name>.git`
    pub fn bare_path(&self, name: &str) -> PathBuf {
        self.basedir().join(format!("{name}{BARE_SUFFIX}"))
    }

    /// Fail with [`DotfilesError::RepoNotFound`] unless `<name>.git` is a directory.
    pub fn existing_bare_path(&self, name: &str) -> Result<PathBuf, DotfilesError> {
        let path = self.bare_path(name);
        if !path.is_dir() {
            return Err(DotfilesError::RepoNotFound {
                name: name.to_string(),
                path,
            });
        }
        Ok(path)
    }

    /// File names in the base directory, sorted.
    pub fn basedir_entries(&self) -> Result<Vec<String>, Error> {
        let basedir = self.basedir();
        let entries = fs::read_dir(basedir)
            .with_context(|| format!("Failed to read base directory {}", basedir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read base directory entry")?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(names)
    }

    /// Entry names with their extension removed, as printed by `list`.
    pub fn listed_names(&self) -> Result<Vec<String>, Error> {
        Ok(self
            .basedir_entries()?
            .iter()
            .map(|name| strip_extension(name).to_string())
            .collect())
    }

    /// Names of every `<name>.git` directory in the base directory, sorted.
    pub fn repo_names(&self) -> Result<Vec<String>, Error> {
        let mut names = Vec::new();
        for entry in self.basedir_entries()? {
            let Some(name) = entry.strip_suffix(BARE_SUFFIX) else {
                continue;
            };
            if !name.is_empty() && self.basedir().join(&entry).is_dir() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}

/// Drop everything from the last `.` on. A dot-file keeps nothing.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Make `path` absolute against the current directory and fold `.` / `..`
/// lexically. Symlinks are not resolved.
pub fn absolutize(path: &Path) -> Result<PathBuf, Error> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}

/// Path of `file` relative to the working-directory root, with no leading
/// separator. Fails when `file` does not lie under `workdir`.
pub fn relative_to_workdir(file: &Path, workdir: &Path) -> Result<PathBuf, Error> {
    let abs_file = absolutize(file)?;
    let abs_workdir = absolutize(workdir)?;

    match abs_file.strip_prefix(&abs_workdir) {
        Ok(relative) if !relative.as_os_str().is_empty() => Ok(relative.to_path_buf()),
        _ => Err(DotfilesError::OutsideWorkdir {
            file: abs_file,
            workdir: abs_workdir,
        }
        .into()),
    }
}
