use thiserror::Error;

/// Unified error type for mkver operations
#[derive(Error, Debug)]
pub enum MkverError {
    #[error("Version resolution failed: {0}")]
    VersionResolution(String),

    #[error("Branch resolution failed: {0}")]
    BranchResolution(String),

    #[error("Command '{command}' failed: {reason}")]
    CommandExecution { command: String, reason: String },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable ${0} is not valid unicode")]
    NotUnicode(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in mkver
pub type Result<T> = std::result::Result<T, MkverError>;

impl MkverError {
    /// Create a version resolution error with context
    pub fn version_resolution(msg: impl Into<String>) -> Self {
        MkverError::VersionResolution(msg.into())
    }

    /// Create a branch resolution error with context
    pub fn branch_resolution(msg: impl Into<String>) -> Self {
        MkverError::BranchResolution(msg.into())
    }

    /// Create a command execution error for `command`
    pub fn command(command: impl Into<String>, reason: impl Into<String>) -> Self {
        MkverError::CommandExecution {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        MkverError::Template(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MkverError::Config(msg.into())
    }
}
