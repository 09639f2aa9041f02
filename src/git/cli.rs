use crate::error::{MkverError, Result};
use crate::git::runner::{command_line, CommandRunner};
use crate::git::{Repository, SHORT_SHA_LEN};

/// Repository lookups through the `git` executable
pub struct CommandRepository<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> CommandRepository<R> {
    pub fn new(runner: R) -> Self {
        CommandRepository { runner }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let out = self.runner.run("git", args)?;
        if out.is_empty() {
            return Err(MkverError::command(
                command_line("git", args),
                "empty output",
            ));
        }
        Ok(out)
    }
}

impl<R: CommandRunner> Repository for CommandRepository<R> {
    fn current_branch(&self) -> Result<String> {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn short_sha(&self) -> Result<String> {
        let short = format!("--short={}", SHORT_SHA_LEN);
        self.git(&["rev-parse", &short, "HEAD"])
    }
}
