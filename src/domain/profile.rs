//! Named profile presets
//!
//! A profile is a shortcut for a whole [Configuration]; explicit values layered on top
//! always win (see [Configuration::with_overrides]).

use crate::domain::configuration::{Configuration, ShaPlacement};
use crate::error::{MkverError, Result};
use std::fmt;
use std::str::FromStr;

/// Built-in profile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Application builds; also selected by the name `default`
    App,
    /// Container images: SHA goes into build metadata, qualifier is dropped
    Docker,
    Gradle,
    Npm,
    Helm,
}

impl Profile {
    pub const ALL: [Profile; 5] = [
        Profile::App,
        Profile::Docker,
        Profile::Gradle,
        Profile::Npm,
        Profile::Helm,
    ];

    /// The preset configuration for this profile
    pub fn preset(self) -> Configuration {
        let long_lived = || patterns(&["^develop$", "^master$", "^main$", "^release", "^hotfix"]);
        let release_lines = || patterns(&["^release", "^hotfix"]);

        match self {
            Profile::App | Profile::Gradle => Configuration {
                profile: Some(self),
                include_branch_ref: true,
                branch_ref_ignore: long_lived(),
                build_num_tag: Some("rc.".to_string()),
                build_num_branch_allow: release_lines(),
                ..Configuration::default()
            },
            Profile::Npm => Configuration {
                profile: Some(self),
                include_sha: true,
                include_branch_ref: true,
                branch_ref_ignore: long_lived(),
                build_num_tag: Some("rc.".to_string()),
                build_num_branch_allow: release_lines(),
                ..Configuration::default()
            },
            Profile::Docker => Configuration {
                profile: Some(self),
                include_sha: true,
                include_branch_ref: true,
                branch_ref_ignore: long_lived(),
                build_num_tag: Some("b".to_string()),
                sha_placement: ShaPlacement::BuildMetadata,
                reattach_qualifier: false,
                ..Configuration::default()
            },
            Profile::Helm => Configuration {
                profile: Some(self),
                include_sha: true,
                build_num_tag: Some("b".to_string()),
                reattach_qualifier: false,
                ..Configuration::default()
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::App => "app",
            Profile::Docker => "docker",
            Profile::Gradle => "gradle",
            Profile::Npm => "npm",
            Profile::Helm => "helm",
        }
    }
}

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

impl FromStr for Profile {
    type Err = MkverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "app" | "default" => Ok(Profile::App),
            "docker" => Ok(Profile::Docker),
            "gradle" => Ok(Profile::Gradle),
            "npm" => Ok(Profile::Npm),
            "helm" => Ok(Profile::Helm),
            _ => Err(MkverError::config(format!(
                "Unknown profile '{}' (expected one of: app, default, docker, gradle, npm, helm)",
                s
            ))),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
