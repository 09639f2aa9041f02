use crate::error::{MkverError, Result};
use crate::git::SHORT_SHA_LEN;
use git2::Repository as Git2Repo;
use std::path::Path;
use std::sync::Mutex;

/// Wrapper around git2::Repository with our trait interface
///
/// `git2::Repository` is `Send` but not `Sync`, so it sits behind a mutex.
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }

    fn with_repo<T>(&self, f: impl FnOnce(&Git2Repo) -> Result<T>) -> Result<T> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| MkverError::branch_resolution("repository lock poisoned"))?;
        f(&repo)
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        self.with_repo(|repo| {
            let head = repo.head()?;

            // Detached HEAD reports "HEAD", matching `git rev-parse --abbrev-ref HEAD`
            if !head.is_branch() {
                return Ok("HEAD".to_string());
            }

            head.shorthand()
                .map(str::to_string)
                .ok_or_else(|| MkverError::branch_resolution("HEAD name is not valid UTF-8"))
        })
    }

    fn short_sha(&self) -> Result<String> {
        self.with_repo(|repo| {
            let commit = repo.head()?.peel_to_commit()?;
            let mut id = commit.id().to_string();
            id.truncate(SHORT_SHA_LEN);
            Ok(id)
        })
    }
}
