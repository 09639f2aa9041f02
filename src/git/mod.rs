//! Git lookups abstraction layer
//!
//! The version engine only ever needs two facts from source control: the current
//! branch and a short commit id. The [Repository] trait captures those so the rest
//! of the crate never spawns processes or opens repositories directly.
//!
//! Implementations:
//!
//! - [cli::CommandRepository]: runs `git` through a [runner::CommandRunner]
//! - [repository::Git2Repository]: reads the repository with the `git2` crate
//! - [mock::MockRepository]: canned answers for tests
//!
//! ```rust,no_run
//! # use mkver::git::{CommandRepository, Repository};
//! # use mkver::git::runner::ProcessRunner;
//! # fn example() -> mkver::Result<()> {
//! let repo = CommandRepository::new(ProcessRunner);
//! let branch = repo.current_branch()?;
//! let sha = repo.short_sha()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;
pub mod runner;

pub use cli::CommandRepository;
pub use mock::{MockRepository, MockRunner};
pub use repository::Git2Repository;
pub use runner::{CommandRunner, ProcessRunner};

use crate::error::Result;

/// Number of hex characters in a short commit id
pub const SHORT_SHA_LEN: usize = 6;

/// Source-control lookups needed to enrich a version
///
/// All implementors must be `Send + Sync`.
pub trait Repository: Send + Sync {
    /// Name of the checked-out branch (e.g. "develop", "feature/x")
    ///
    /// # Returns
    /// * `Ok(String)` - Branch name as reported by git
    /// * `Err` - If the repository or HEAD cannot be read
    fn current_branch(&self) -> Result<String>;

    /// First [SHORT_SHA_LEN] characters of the HEAD commit id
    fn short_sha(&self) -> Result<String>;
}
