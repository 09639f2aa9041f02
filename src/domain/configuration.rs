use crate::domain::profile::Profile;
use crate::domain::version::QualifierMode;

/// Where the commit SHA lands in the synthesized version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaPlacement {
    /// `-<sha>`, appended before the qualifier is reattached
    #[default]
    Inline,
    /// `+git.<sha>`, appended last, after the qualifier
    BuildMetadata,
}

/// Resolved rule set for one invocation.
///
/// Built once from a profile preset plus explicit overrides and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub profile: Option<Profile>,
    /// Environment variable holding the version
    pub env: Option<String>,
    /// Properties file holding the version
    pub gradle_file: Option<String>,
    pub include_sha: bool,
    pub include_branch_ref: bool,
    pub branch_ref_ignore: Vec<String>,
    /// `None` and `Some("")` both mean "no build-number segment"
    pub build_num_tag: Option<String>,
    pub build_num_branch_allow: Vec<String>,
    pub qualifier_mode: QualifierMode,
    pub sha_placement: ShaPlacement,
    pub reattach_qualifier: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            profile: None,
            env: None,
            gradle_file: None,
            include_sha: false,
            include_branch_ref: false,
            branch_ref_ignore: Vec::new(),
            build_num_tag: None,
            build_num_branch_allow: Vec::new(),
            qualifier_mode: QualifierMode::FirstSegment,
            sha_placement: ShaPlacement::Inline,
            reattach_qualifier: true,
        }
    }
}

/// Explicit values supplied by a configuration file or the command line.
///
/// Every `Some` replaces the corresponding preset value; lists are replaced whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub profile: Option<Profile>,
    pub env: Option<String>,
    pub gradle_file: Option<String>,
    pub include_sha: Option<bool>,
    pub include_branch_ref: Option<bool>,
    pub branch_ref_ignore: Option<Vec<String>>,
    pub build_num_tag: Option<String>,
    pub build_num_branch_allow: Option<Vec<String>>,
    pub full_qualifier: Option<bool>,
}

impl ConfigOverrides {
    /// Layer `higher` on top of `self`; values set in `higher` win.
    pub fn merge(self, higher: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            profile: higher.profile.or(self.profile),
            env: higher.env.or(self.env),
            gradle_file: higher.gradle_file.or(self.gradle_file),
            include_sha: higher.include_sha.or(self.include_sha),
            include_branch_ref: higher.include_branch_ref.or(self.include_branch_ref),
            branch_ref_ignore: higher.branch_ref_ignore.or(self.branch_ref_ignore),
            build_num_tag: higher.build_num_tag.or(self.build_num_tag),
            build_num_branch_allow: higher
                .build_num_branch_allow
                .or(self.build_num_branch_allow),
            full_qualifier: higher.full_qualifier.or(self.full_qualifier),
        }
    }
}

impl Configuration {
    /// Preset for `profile`, or the empty configuration when there is none.
    pub fn for_profile(profile: Option<Profile>) -> Self {
        profile.map(Profile::preset).unwrap_or_default()
    }

    /// Resolve the final configuration: the preset of the overridden profile, then
    /// every explicit value on top of it.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Configuration::for_profile(overrides.profile).with_overrides(overrides)
    }

    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        let qualifier_mode = match overrides.full_qualifier {
            Some(true) => QualifierMode::Remainder,
            Some(false) => QualifierMode::FirstSegment,
            None => self.qualifier_mode,
        };

        Configuration {
            profile: self.profile,
            env: overrides.env.or(self.env),
            gradle_file: overrides.gradle_file.or(self.gradle_file),
            include_sha: overrides.include_sha.unwrap_or(self.include_sha),
            include_branch_ref: overrides
                .include_branch_ref
                .unwrap_or(self.include_branch_ref),
            branch_ref_ignore: overrides.branch_ref_ignore.unwrap_or(self.branch_ref_ignore),
            build_num_tag: overrides.build_num_tag.or(self.build_num_tag),
            build_num_branch_allow: overrides
                .build_num_branch_allow
                .unwrap_or(self.build_num_branch_allow),
            qualifier_mode,
            sha_placement: self.sha_placement,
            reattach_qualifier: self.reattach_qualifier,
        }
    }

    /// The build-number tag, if a build-number segment is wanted at all
    pub fn active_build_num_tag(&self) -> Option<&str> {
        self.build_num_tag.as_deref().filter(|tag| !tag.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_is_inert() {
        let cfg = Configuration::default();
        assert_eq!(cfg.profile, None);
        assert!(!cfg.include_sha);
        assert!(!cfg.include_branch_ref);
        assert_eq!(cfg.active_build_num_tag(), None);
        assert!(cfg.reattach_qualifier);
    }

    #[test]
    fn test_empty_build_num_tag_equals_absent() {
        let cfg = Configuration {
            build_num_tag: Some(String::new()),
            ..Configuration::default()
        };
        assert_eq!(cfg.active_build_num_tag(), None);
    }

    #[test]
    fn test_explicit_values_win_over_preset() {
        let cfg = Configuration::resolve(ConfigOverrides {
            profile: Some(Profile::App),
            include_branch_ref: Some(false),
            build_num_tag: Some("b".to_string()),
            ..ConfigOverrides::default()
        });

        assert_eq!(cfg.profile, Some(Profile::App));
        assert!(!cfg.include_branch_ref);
        assert_eq!(cfg.active_build_num_tag(), Some("b"));
        // untouched preset values survive
        assert_eq!(
            cfg.build_num_branch_allow,
            vec!["^release".to_string(), "^hotfix".to_string()]
        );
    }

    #[test]
    fn test_override_can_disable_preset_build_num() {
        let cfg = Configuration::resolve(ConfigOverrides {
            profile: Some(Profile::Docker),
            build_num_tag: Some(String::new()),
            ..ConfigOverrides::default()
        });
        assert_eq!(cfg.active_build_num_tag(), None);
    }

    #[test]
    fn test_override_lists_replace_preset_lists() {
        let cfg = Configuration::resolve(ConfigOverrides {
            profile: Some(Profile::App),
            branch_ref_ignore: Some(vec!["^main$".to_string()]),
            ..ConfigOverrides::default()
        });
        assert_eq!(cfg.branch_ref_ignore, vec!["^main$".to_string()]);
    }

    #[test]
    fn test_merge_prefers_higher_layer() {
        let file = ConfigOverrides {
            profile: Some(Profile::Npm),
            include_sha: Some(true),
            env: Some("APP_VERSION".to_string()),
            ..ConfigOverrides::default()
        };
        let cli = ConfigOverrides {
            profile: Some(Profile::Docker),
            include_sha: Some(false),
            ..ConfigOverrides::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.profile, Some(Profile::Docker));
        assert_eq!(merged.include_sha, Some(false));
        assert_eq!(merged.env.as_deref(), Some("APP_VERSION"));
    }

    #[test]
    fn test_full_qualifier_override() {
        let cfg = Configuration::resolve(ConfigOverrides {
            full_qualifier: Some(true),
            ..ConfigOverrides::default()
        });
        assert_eq!(cfg.qualifier_mode, QualifierMode::Remainder);
    }

    #[test]
    fn test_profile_policy_fields_not_overridable() {
        let cfg = Configuration::resolve(ConfigOverrides {
            profile: Some(Profile::Docker),
            include_sha: Some(true),
            ..ConfigOverrides::default()
        });
        assert_eq!(cfg.sha_placement, ShaPlacement::BuildMetadata);
        assert!(!cfg.reattach_qualifier);
    }
}
