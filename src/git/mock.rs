use crate::error::{MkverError, Result};
use crate::git::runner::{command_line, CommandRunner};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    branch: Option<String>,
    sha: Option<String>,
}

impl MockRepository {
    /// Create a repository that fails every lookup
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the branch reported as checked out
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Set the short commit id reported for HEAD
    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = Some(sha.into());
        self
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| MkverError::branch_resolution("no branch in mock repository"))
    }

    fn short_sha(&self) -> Result<String> {
        self.sha
            .clone()
            .ok_or_else(|| MkverError::command("git rev-parse --short=6 HEAD", "no sha in mock"))
    }
}

/// Command runner returning canned output keyed by the full command line
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    responses: HashMap<String, String>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` (e.g. "git rev-parse HEAD") with `stdout`
    pub fn respond(mut self, command: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.responses.insert(command.into(), stdout.into());
        self
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let line = command_line(program, args);
        self.responses
            .get(&line)
            .map(|out| out.trim().to_string())
            .ok_or_else(|| MkverError::command(line, "command not available"))
    }
}
