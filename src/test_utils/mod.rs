#[cfg(test)]
pub mod remote_fixture;

#[cfg(test)]
pub mod repo_extensions;

#[cfg(test)]
pub use remote_fixture::{seeded_remote, seeded_remote_named, TestRemote};

#[cfg(test)]
pub use repo_extensions::{temp_layout, RepoAssertions, WorkdirOperations};
