//! Version synthesis pipeline
//!
//! Order matters and is fixed:
//! 1. split the raw version into root and qualifier
//! 2. branch-ref segment
//! 3. build-number segment
//! 4. inline commit SHA (`-<sha>`)
//! 5. qualifier, when the profile reattaches it
//! 6. build-metadata commit SHA (`+git.<sha>`)
//!
//! The pipeline never fails; fallbacks for unresolved inputs are applied by the
//! segment builders or by the caller before synthesis.

use crate::domain::segment::{self, ShaSegment};
use crate::domain::{BranchContext, Configuration, RawVersion, ShaPlacement};
use tracing::debug;

/// Plain values resolved by the collaborators, fed into [synthesize].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisInput {
    pub raw_version: String,
    pub branch: BranchContext,
    pub build_number: Option<String>,
    pub commit_sha: Option<String>,
}

impl SynthesisInput {
    pub fn new(raw_version: impl Into<String>, branch: impl Into<String>) -> Self {
        SynthesisInput {
            raw_version: raw_version.into(),
            branch: BranchContext::new(branch),
            build_number: None,
            commit_sha: None,
        }
    }

    pub fn with_build_number(mut self, build_number: impl Into<String>) -> Self {
        self.build_number = Some(build_number.into());
        self
    }

    pub fn with_commit_sha(mut self, sha: impl Into<String>) -> Self {
        self.commit_sha = Some(sha.into());
        self
    }
}

/// Compute the derived version string for `input` under `cfg`.
///
/// # Example
/// ```
/// # use mkver::domain::Configuration;
/// # use mkver::synthesis::{synthesize, SynthesisInput};
/// let cfg = Configuration {
///     include_branch_ref: true,
///     ..Configuration::default()
/// };
/// let input = SynthesisInput::new("1.0.0-SNAPSHOT", "defect/X");
/// assert_eq!(synthesize(&cfg, &input), "1.0.0-defect-x-SNAPSHOT");
/// ```
pub fn synthesize(cfg: &Configuration, input: &SynthesisInput) -> String {
    let version = RawVersion::split(&input.raw_version, cfg.qualifier_mode);
    let mut result = version.root.clone();

    if let Some(branch_ref) = segment::branch_ref_segment(cfg, &input.branch) {
        result.push_str(&branch_ref);
    }

    if let Some(build) =
        segment::build_number_segment(cfg, &input.branch, input.build_number.as_deref())
    {
        result.push_str(&build);
    }

    let sha = segment::commit_sha_segment(cfg, input.commit_sha.as_deref());

    if let Some(ShaSegment {
        placement: ShaPlacement::Inline,
        text,
    }) = &sha
    {
        result.push_str(text);
    }

    if let Some(qualifier) = version.qualifier.as_deref() {
        if cfg.reattach_qualifier {
            result.push('-');
            result.push_str(qualifier);
        } else {
            debug!("Dropping qualifier '{}' for profile {:?}", qualifier, cfg.profile);
        }
    }

    if let Some(ShaSegment {
        placement: ShaPlacement::BuildMetadata,
        text,
    }) = &sha
    {
        result.push_str(text);
    }

    debug!(
        "Synthesized '{}' from '{}' on branch '{}'",
        result, input.raw_version, input.branch.name
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Profile;

    fn ci_input(version: &str, branch: &str) -> SynthesisInput {
        SynthesisInput::new(version, branch)
            .with_build_number("13")
            .with_commit_sha("1a2b3c")
    }

    fn cfg_with(f: impl FnOnce(&mut Configuration)) -> Configuration {
        let mut cfg = Configuration::default();
        f(&mut cfg);
        cfg
    }

    #[test]
    fn test_empty_configuration_reattaches_qualifier() {
        let cfg = Configuration::default();
        assert_eq!(
            synthesize(&cfg, &ci_input("1.0.0-SNAPSHOT", "develop")),
            "1.0.0-SNAPSHOT"
        );
        assert_eq!(synthesize(&cfg, &ci_input("1.0.0", "master")), "1.0.0");
    }

    #[test]
    fn test_git_sha_inline_before_qualifier() {
        let cfg = cfg_with(|c| c.include_sha = true);
        assert_eq!(
            synthesize(&cfg, &ci_input("1.0.0-SNAPSHOT", "develop")),
            "1.0.0-1a2b3c-SNAPSHOT"
        );
        assert_eq!(synthesize(&cfg, &ci_input("1.0.0", "master")), "1.0.0-1a2b3c");
    }

    #[test]
    fn test_git_ref() {
        let cfg = cfg_with(|c| c.include_branch_ref = true);
        let cases = [
            ("develop", "1.0.0-SNAPSHOT", "1.0.0-develop-SNAPSHOT"),
            ("develop", "1.0.0", "1.0.0-develop"),
            ("defect/X", "1.0.0-SNAPSHOT", "1.0.0-defect-x-SNAPSHOT"),
            ("defect/X", "1.0.0", "1.0.0-defect-x"),
            ("feature/TEST-123", "1.0.0", "1.0.0-feature-test-123"),
        ];
        for (branch, version, expected) in cases {
            assert_eq!(synthesize(&cfg, &ci_input(version, branch)), expected);
        }
    }

    #[test]
    fn test_git_ref_ignore() {
        let develop = cfg_with(|c| {
            c.include_branch_ref = true;
            c.branch_ref_ignore = vec!["^develop$".to_string()];
        });
        assert_eq!(synthesize(&develop, &ci_input("1.0.0", "develop")), "1.0.0");

        let release = cfg_with(|c| {
            c.include_branch_ref = true;
            c.branch_ref_ignore = vec!["^release".to_string()];
        });
        assert_eq!(synthesize(&release, &ci_input("1.0.0", "release/1.0.0")), "1.0.0");
        assert_eq!(
            synthesize(&release, &ci_input("1.0.0", "feature/x")),
            "1.0.0-feature-x"
        );
    }

    #[test]
    fn test_git_build_num() {
        let rc = cfg_with(|c| c.build_num_tag = Some("rc.".to_string()));
        assert_eq!(
            synthesize(&rc, &ci_input("1.0.0-SNAPSHOT", "develop")),
            "1.0.0-rc.13-SNAPSHOT"
        );
        assert_eq!(
            synthesize(&rc, &ci_input("1.0.0", "release/1.0.0")),
            "1.0.0-rc.13"
        );

        let b = cfg_with(|c| c.build_num_tag = Some("b".to_string()));
        assert_eq!(synthesize(&b, &ci_input("1.0.0", "develop")), "1.0.0-b13");
    }

    #[test]
    fn test_git_build_num_branch() {
        let cfg = cfg_with(|c| {
            c.build_num_tag = Some("rc.".to_string());
            c.build_num_branch_allow = vec!["^release".to_string(), "^hotfix".to_string()];
        });
        assert_eq!(
            synthesize(&cfg, &ci_input("1.0.0-SNAPSHOT", "release/1.0.0")),
            "1.0.0-rc.13-SNAPSHOT"
        );
        assert_eq!(
            synthesize(&cfg, &ci_input("1.0.0-SNAPSHOT", "develop")),
            "1.0.0-SNAPSHOT"
        );
    }

    #[test]
    fn test_segment_order_ref_then_build_then_sha() {
        let cfg = cfg_with(|c| {
            c.include_branch_ref = true;
            c.build_num_tag = Some("b".to_string());
            c.include_sha = true;
        });
        assert_eq!(
            synthesize(&cfg, &ci_input("2.0.0-beta", "feature/x")),
            "2.0.0-feature-x-b13-1a2b3c-beta"
        );
    }

    #[test]
    fn test_app_profile() {
        let cfg = Profile::App.preset();
        let cases = [
            ("develop", "1.0.0-SNAPSHOT", "1.0.0-SNAPSHOT"),
            ("develop-x", "1.0.0-SNAPSHOT", "1.0.0-develop-x-SNAPSHOT"),
            ("feature/x", "1.0.0-SNAPSHOT", "1.0.0-feature-x-SNAPSHOT"),
            ("defect/XYZ-123", "1.0.0-SNAPSHOT", "1.0.0-defect-xyz-123-SNAPSHOT"),
            ("release/1.0.0", "1.0.0", "1.0.0-rc.13"),
            ("hotfix/1.1.0", "1.1.0", "1.1.0-rc.13"),
            ("master", "1.0.0", "1.0.0"),
        ];
        for (branch, version, expected) in cases {
            assert_eq!(
                synthesize(&cfg, &ci_input(version, branch)),
                expected,
                "branch {}",
                branch
            );
        }
    }

    #[test]
    fn test_docker_profile() {
        let cfg = Profile::Docker.preset();
        let cases = [
            ("develop", "1.0.0-SNAPSHOT", "1.0.0-b13+git.1a2b3c"),
            ("feature/x", "1.0.0-SNAPSHOT", "1.0.0-feature-x-b13+git.1a2b3c"),
            ("release/1.0.0", "1.0.0", "1.0.0-b13+git.1a2b3c"),
            ("master", "1.0.0", "1.0.0-b13+git.1a2b3c"),
        ];
        for (branch, version, expected) in cases {
            assert_eq!(
                synthesize(&cfg, &ci_input(version, branch)),
                expected,
                "branch {}",
                branch
            );
        }
    }

    #[test]
    fn test_gradle_profile_reattaches_qualifier() {
        let cfg = Profile::Gradle.preset();
        assert_eq!(
            synthesize(&cfg, &ci_input("1.0.0-SNAPSHOT", "feature/x")),
            "1.0.0-feature-x-SNAPSHOT"
        );
    }

    #[test]
    fn test_build_metadata_sha_comes_after_qualifier() {
        let mut cfg = Profile::Docker.preset();
        cfg.reattach_qualifier = true;
        assert_eq!(
            synthesize(&cfg, &ci_input("1.0.0-SNAPSHOT", "develop")),
            "1.0.0-b13-SNAPSHOT+git.1a2b3c"
        );
    }

    #[test]
    fn test_build_number_segment_appears_once() {
        let cfg = cfg_with(|c| {
            c.build_num_tag = Some("rc.".to_string());
            c.build_num_branch_allow = vec!["^release".to_string(), "release".to_string()];
        });
        let out = synthesize(&cfg, &ci_input("1.0.0", "release/1.0.0"));
        assert_eq!(out.matches("rc.13").count(), 1);
    }

    #[test]
    fn test_legacy_qualifier_split() {
        let cfg = Configuration::default();
        assert_eq!(
            synthesize(&cfg, &ci_input("1.0.0-rc-1", "develop")),
            "1.0.0-rc"
        );

        let full = cfg_with(|c| c.qualifier_mode = crate::domain::QualifierMode::Remainder);
        assert_eq!(
            synthesize(&full, &ci_input("1.0.0-rc-1", "develop")),
            "1.0.0-rc-1"
        );
    }

    #[test]
    fn test_missing_inputs_use_defaults() {
        let cfg = cfg_with(|c| {
            c.build_num_tag = Some("rc".to_string());
            c.include_sha = true;
        });
        let input = SynthesisInput::new("1.0.1", "hotfix/1.0.1");
        assert_eq!(synthesize(&cfg, &input), "1.0.1-rc0-unknown");
    }
}
