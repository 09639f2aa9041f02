//! Segment builders
//!
//! Each builder decides whether its segment applies and returns the text to append,
//! separator included. None of them resolve anything themselves; build number and
//! SHA arrive as plain values from the caller.

use crate::domain::branch::BranchContext;
use crate::domain::configuration::{Configuration, ShaPlacement};
use crate::domain::pattern;

/// Build number used when none is available
pub const DEFAULT_BUILD_NUMBER: &str = "0";

/// Commit id used when none could be resolved
pub const UNKNOWN_SHA: &str = "unknown";

/// Commit SHA segment together with where it belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaSegment {
    pub placement: ShaPlacement,
    pub text: String,
}

/// `-<branch slug>` unless branch refs are off or the branch is on the ignore list.
pub fn branch_ref_segment(cfg: &Configuration, branch: &BranchContext) -> Option<String> {
    if !cfg.include_branch_ref {
        return None;
    }

    if pattern::matches(&branch.name, cfg.branch_ref_ignore.as_slice()) {
        return None;
    }

    Some(format!("-{}", branch.slug()))
}

/// `-<tag><build number>` when a tag is configured and the branch is allowed.
///
/// An empty allow list allows every branch.
pub fn build_number_segment(
    cfg: &Configuration,
    branch: &BranchContext,
    build_number: Option<&str>,
) -> Option<String> {
    let tag = cfg.active_build_num_tag()?;

    if !cfg.build_num_branch_allow.is_empty()
        && !pattern::matches(&branch.name, cfg.build_num_branch_allow.as_slice())
    {
        return None;
    }

    let build_number = build_number
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_BUILD_NUMBER);

    Some(format!("-{}{}", tag, build_number))
}

/// `-<sha>` or `+git.<sha>` depending on the profile's placement.
pub fn commit_sha_segment(cfg: &Configuration, sha: Option<&str>) -> Option<ShaSegment> {
    if !cfg.include_sha {
        return None;
    }

    let sha = sha.filter(|s| !s.is_empty()).unwrap_or(UNKNOWN_SHA);

    let text = match cfg.sha_placement {
        ShaPlacement::Inline => format!("-{}", sha),
        ShaPlacement::BuildMetadata => format!("+git.{}", sha),
    };

    Some(ShaSegment {
        placement: cfg.sha_placement,
        text,
    })
}
