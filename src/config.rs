use crate::domain::{ConfigOverrides, Profile};
use crate::error::{MkverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name searched in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "mkver.toml";

/// Contents of an `mkver.toml` file.
///
/// Every field is optional; whatever is set overrides the profile preset and is
/// itself overridden by command-line flags.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub profile: Option<String>,

    #[serde(default)]
    pub env: Option<String>,

    #[serde(default)]
    pub gradle: Option<String>,

    #[serde(default)]
    pub git_sha: Option<bool>,

    #[serde(default)]
    pub git_ref: Option<bool>,

    #[serde(default)]
    pub git_ref_ignore: Option<Vec<String>>,

    #[serde(default)]
    pub git_build_num: Option<String>,

    #[serde(default)]
    pub git_build_num_branch: Option<Vec<String>>,

    #[serde(default)]
    pub full_qualifier: Option<bool>,
}

impl FileConfig {
    /// Convert into configuration overrides, validating the profile name.
    pub fn into_overrides(self) -> Result<ConfigOverrides> {
        let profile = self
            .profile
            .as_deref()
            .map(str::parse::<Profile>)
            .transpose()?;

        Ok(ConfigOverrides {
            profile,
            env: self.env,
            gradle_file: self.gradle,
            include_sha: self.git_sha,
            include_branch_ref: self.git_ref,
            branch_ref_ignore: self.git_ref_ignore,
            build_num_tag: self.git_build_num,
            build_num_branch_allow: self.git_build_num_branch,
            full_qualifier: self.full_qualifier,
        })
    }
}

/// Path of the config file to use, if any.
///
/// Looked up in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `mkver.toml` in `working_dir`
/// 3. `mkver/mkver.toml` in the user config directory
pub fn locate_config(config_path: Option<&str>, working_dir: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = config_path {
        let path = working_dir.join(path);
        if !path.is_file() {
            return Err(MkverError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    let local = working_dir.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(dirs::config_dir()
        .map(|dir| dir.join("mkver").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file()))
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `working_dir` - Directory relative paths and the local file are resolved against
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded configuration, or the empty one if no file was found
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, working_dir: &Path) -> Result<FileConfig> {
    let Some(path) = locate_config(config_path, working_dir)? else {
        debug!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
        return Ok(FileConfig::default());
    };

    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(&path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
