use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use git2::{build::RepoBuilder, ErrorCode, Repository};
use tracing::{debug, info};

use crate::config::Layout;
use crate::error::DotfilesError;
use crate::git::remotes::auth;
use crate::paths::repo_name_from_url;

/// A bare dotfile repository bound to the shared working directory.
pub struct DotfileRepo {
    name: String,
    bare_path: PathBuf,
    workdir: PathBuf,
    repo: Repository,
}

impl DotfileRepo {
    /// Open `basedir/<name>.git` and bind it to the layout's working directory.
    ///
    /// Nothing is created on disk when the bare repository does not exist.
    pub fn open(layout: &Layout, name: &str) -> Result<Self, Error> {
        let bare_path = layout.existing_bare_path(name)?;
        debug!(repo = name, path = %bare_path.display(), "opening bare repository");

        let repo = Repository::open_bare(&bare_path).context(format!(
            "Cannot open bare git repo at {}",
            bare_path.display()
        ))?;

        Self::bind(name, bare_path, layout.workdir(), repo)
    }

    /// Clone `url` as a bare repository under the base directory and
    /// force-checkout its HEAD into the shared working directory.
    pub fn clone_bare(layout: &Layout, url: &str) -> Result<Self, Error> {
        let name = repo_name_from_url(url)?;
        let bare_path = layout.bare_path(&name);

        if bare_path.exists() {
            return Err(DotfilesError::RepoAlreadyExists {
                name,
                path: bare_path,
            }
            .into());
        }

        fs::create_dir_all(layout.basedir()).context(format!(
            "Failed to create base directory {}",
            layout.basedir().display()
        ))?;

        info!(url, path = %bare_path.display(), "cloning bare repository");
        let repo = RepoBuilder::new()
            .bare(true)
            .fetch_options(auth::fetch_options())
            .clone(url, &bare_path)
            .context(format!("Failed to clone '{url}'"))?;

        let dotfile_repo = Self::bind(&name, bare_path, layout.workdir(), repo)?;
        dotfile_repo.force_checkout_head()?;

        Ok(dotfile_repo)
    }

    fn bind(name: &str, bare_path: PathBuf, workdir: &Path, repo: Repository) -> Result<Self, Error> {
        fs::create_dir_all(workdir).context(format!(
            "Failed to create working directory {}",
            workdir.display()
        ))?;

        repo.set_workdir(workdir, false).context(format!(
            "Failed to bind working directory {}",
            workdir.display()
        ))?;
        debug!(repo = name, workdir = %workdir.display(), "bound working directory");

        Ok(Self {
            name: name.to_string(),
            bare_path,
            workdir: workdir.to_path_buf(),
            repo,
        })
    }

    /// Overwrite the working directory with the tree at HEAD. An empty
    /// repository (unborn HEAD) has nothing to check out.
    pub fn force_checkout_head(&self) -> Result<(), Error> {
        match self.repo.head() {
            Ok(_) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                debug!(repo = %self.name, "HEAD is unborn, skipping checkout");
                return Ok(());
            }
            Err(e) => return Err(Error::new(e).context("Failed to resolve HEAD")),
        }

        let mut checkout_opts = git2::build::CheckoutBuilder::new();
        checkout_opts.force();
        self.repo
            .checkout_head(Some(&mut checkout_opts))
            .context("Failed to checkout HEAD into working directory")?;

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bare_path(&self) -> &Path {
        &self.bare_path
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get access to the internal git2 Repository
    pub(crate) fn repo(&self) -> &Repository {
        &self.repo
    }
}
