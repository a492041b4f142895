//! Git operations module
//!
//! Everything here wraps `git2` around a [`DotfileRepo`], a bare repository
//! bound to the shared working directory:
//!
//! - `repository`: Open, clone and checkout, commit signatures
//! - `branches`: Current branch resolution
//! - `commits`: Staging, committing and unstaging
//! - `worktree`: Per-file working tree status
//! - `remotes`: SSH-agent auth, push, fetch and fast-forward pull

pub mod branches;
pub mod commits;
pub mod remotes;
pub mod repository;
pub mod worktree;

// Re-export the main types
pub use repository::core::DotfileRepo;
