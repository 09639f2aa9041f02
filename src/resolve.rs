//! Resolution of the plain inputs the synthesis pipeline consumes
//!
//! Version, branch, build number and commit id come from the environment, a
//! properties file or git. Only the version is mandatory; the others fall back
//! to defaults and report a [ResolutionWarning].

use crate::domain::branch::UNKNOWN_BRANCH;
use crate::domain::segment::UNKNOWN_SHA;
use crate::domain::Configuration;
use crate::environment::Environment;
use crate::error::{MkverError, Result};
use crate::git::Repository;
use crate::properties;
use crate::warning::ResolutionWarning;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default variable holding the version
pub const VERSION_VAR: &str = "VERSION";
/// Properties file looked up in the working directory
pub const DEFAULT_PROPERTIES_FILE: &str = "gradle.properties";
/// Key holding the version inside a properties file
pub const VERSION_PROPERTY: &str = "version";

/// Jenkins-style CI variables
pub const BUILD_NUMBER_VAR: &str = "BUILD_NUMBER";
pub const CHANGE_ID_VAR: &str = "CHANGE_ID";
pub const CHANGE_BRANCH_VAR: &str = "CHANGE_BRANCH";
pub const BRANCH_NAME_VAR: &str = "BRANCH_NAME";

/// A resolved value plus the warning explaining a fallback, if one was used
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub value: String,
    pub warning: Option<ResolutionWarning>,
}

impl Resolved {
    fn found(value: String) -> Self {
        Resolved {
            value,
            warning: None,
        }
    }
}

/// Locates the raw version
pub struct VersionResolver<'a, E: Environment> {
    env: &'a E,
    working_dir: PathBuf,
}

impl<'a, E: Environment> VersionResolver<'a, E> {
    pub fn new(env: &'a E, working_dir: impl Into<PathBuf>) -> Self {
        VersionResolver {
            env,
            working_dir: working_dir.into(),
        }
    }

    /// Resolve the raw version; first hit wins:
    /// 1. the variable named by `cfg.env`
    /// 2. `$VERSION`
    /// 3. the properties file named by `cfg.gradle_file`
    /// 4. `gradle.properties` in the working directory
    ///
    /// # Returns
    /// * `Ok(String)` - The raw version
    /// * `Err(MkverError::NotUnicode)` - If a version variable is set but unreadable
    /// * `Err(MkverError::VersionResolution)` - If an explicitly named source is missing,
    ///   or no source yields a version
    pub fn resolve(&self, cfg: &Configuration) -> Result<String> {
        if let Some(var) = cfg.env.as_deref().filter(|v| !v.is_empty()) {
            debug!("Resolving version from ${}", var);
            return self.env.lookup(var)?.ok_or_else(|| {
                MkverError::version_resolution(format!(
                    "Failed to resolve version from env variable: ${}",
                    var
                ))
            });
        }

        if let Some(version) = self.env.lookup(VERSION_VAR)? {
            debug!("Resolved version from ${}", VERSION_VAR);
            return Ok(version);
        }

        if let Some(file) = cfg.gradle_file.as_deref().filter(|f| !f.is_empty()) {
            let path = self.working_dir.join(file);
            if !path.is_file() {
                return Err(MkverError::version_resolution(format!(
                    "Failed to resolve version from gradle properties file: {}",
                    file
                )));
            }
            return read_version_property(&path);
        }

        let default = self.working_dir.join(DEFAULT_PROPERTIES_FILE);
        if default.is_file() {
            return read_version_property(&default);
        }

        Err(MkverError::version_resolution("Failed to resolve version"))
    }
}

fn read_version_property(path: &Path) -> Result<String> {
    debug!("Resolving version from {}", path.display());
    let props = properties::read(path).map_err(|e| {
        MkverError::version_resolution(format!(
            "Failed to read properties file {}: {}",
            path.display(),
            e
        ))
    })?;

    props
        .get(VERSION_PROPERTY)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| {
            MkverError::version_resolution(format!(
                "No '{}' property in {}",
                VERSION_PROPERTY,
                path.display()
            ))
        })
}

/// Current branch: CI variables when `$BUILD_NUMBER` is set (`$CHANGE_BRANCH` for pull
/// requests, `$BRANCH_NAME` otherwise), else the repository. Falls back to "unknown".
pub fn resolve_branch(env: &impl Environment, repo: &dyn Repository) -> Resolved {
    let attempt = if env.contains(BUILD_NUMBER_VAR) {
        let var = if env.contains(CHANGE_ID_VAR) {
            CHANGE_BRANCH_VAR
        } else {
            BRANCH_NAME_VAR
        };
        debug!("CI build detected, reading branch from ${}", var);
        env.lookup(var).and_then(|value| {
            value.ok_or_else(|| MkverError::branch_resolution(format!("${} is not set", var)))
        })
    } else {
        repo.current_branch()
    };

    let reason = match attempt {
        Ok(branch) if !branch.trim().is_empty() => {
            return Resolved::found(branch.trim().to_string())
        }
        Ok(_) => "empty branch name".to_string(),
        Err(e) => e.to_string(),
    };

    Resolved {
        value: UNKNOWN_BRANCH.to_string(),
        warning: Some(ResolutionWarning::BranchUnresolved { reason }),
    }
}

/// Short commit id of HEAD, falling back to "unknown".
pub fn resolve_sha(repo: &dyn Repository) -> Resolved {
    let reason = match repo.short_sha() {
        Ok(sha) if !sha.trim().is_empty() => return Resolved::found(sha.trim().to_string()),
        Ok(_) => "empty output".to_string(),
        Err(e) => e.to_string(),
    };

    Resolved {
        value: UNKNOWN_SHA.to_string(),
        warning: Some(ResolutionWarning::ShaUnresolved { reason }),
    }
}

/// `$BUILD_NUMBER`, if set and non-empty
pub fn resolve_build_number(env: &impl Environment) -> Option<String> {
    env.var(BUILD_NUMBER_VAR).filter(|n| !n.trim().is_empty())
}
