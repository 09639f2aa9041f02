//! Main workflow orchestration logic
//!
//! Resolves configuration and inputs, then runs either the synthesis pipeline or the
//! template formatter. Kept apart from `main` so the whole run can be exercised
//! with an in-memory environment and a mock repository.

use std::path::PathBuf;

use tracing::debug;

use crate::config;
use crate::domain::{ConfigOverrides, Configuration};
use crate::environment::Environment;
use crate::error::{MkverError, Result};
use crate::git::Repository;
use crate::resolve::{self, VersionResolver};
use crate::synthesis::{self, SynthesisInput};
use crate::template::{self, Metadata};
use crate::warning::{self, ResolutionWarning};

/// Arguments for one run
///
/// Mirrors the CLI flags in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Skip config file discovery entirely
    pub no_config: bool,

    /// Explicit values from the command line
    pub overrides: ConfigOverrides,

    /// Render this template instead of running the pipeline
    pub template: Option<String>,

    /// Directory relative paths are resolved against
    pub working_dir: PathBuf,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The computed version
    pub version: String,

    /// Configuration the version was computed with
    pub configuration: Configuration,

    /// Fallbacks taken along the way
    pub warnings: Vec<ResolutionWarning>,
}

/// Resolve the configuration for `args`: preset, then config file, then CLI values.
pub fn resolve_configuration(args: &RunArgs) -> Result<Configuration> {
    let file = if args.no_config {
        ConfigOverrides::default()
    } else {
        config::load_config(args.config_path.as_deref(), &args.working_dir)?.into_overrides()?
    };

    let cfg = Configuration::resolve(file.merge(args.overrides.clone()));
    debug!("Resolved configuration: {:?}", cfg);
    Ok(cfg)
}

/// Compute the version.
///
/// # Returns
/// * `Ok(RunOutcome)` - The version plus any fallbacks that were used
/// * `Err` - If configuration or version resolution fails, the template is invalid,
///   or the result is empty
pub fn run(args: &RunArgs, env: &impl Environment, repo: &dyn Repository) -> Result<RunOutcome> {
    let cfg = resolve_configuration(args)?;
    let mut warnings = warning::invalid_patterns(&cfg);

    let raw_version = VersionResolver::new(env, &args.working_dir).resolve(&cfg)?;
    debug!("Raw version: '{}'", raw_version);

    let branch = resolve::resolve_branch(env, repo);
    warnings.extend(branch.warning);

    let version = if let Some(text) = args.template.as_deref() {
        let sha = resolve::resolve_sha(repo);
        warnings.extend(sha.warning);

        let metadata = Metadata {
            origin: raw_version,
            git_branch: branch.value,
            git_sha: sha.value,
        };
        template::format(&metadata, text)?
    } else {
        let mut input = SynthesisInput::new(raw_version, branch.value);
        input.build_number = resolve::resolve_build_number(env);

        if cfg.include_sha {
            let sha = resolve::resolve_sha(repo);
            warnings.extend(sha.warning);
            input.commit_sha = Some(sha.value);
        }

        synthesis::synthesize(&cfg, &input)
    };

    if version.trim().is_empty() {
        return Err(MkverError::version_resolution("Failed to calculate version"));
    }

    Ok(RunOutcome {
        version,
        configuration: cfg,
        warnings,
    })
}
