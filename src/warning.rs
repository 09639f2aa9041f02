use crate::domain::{pattern, Configuration};
use std::fmt;

/// Non-fatal problems met while resolving inputs.
/// Each one has a fallback; they are reported, never raised.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionWarning {
    /// Branch could not be determined; "unknown" is used instead
    BranchUnresolved { reason: String },
    /// Commit id could not be determined; "unknown" is used instead
    ShaUnresolved { reason: String },
    /// A branch pattern does not compile and never matches
    InvalidPattern {
        option: &'static str,
        pattern: String,
        reason: String,
    },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::BranchUnresolved { reason } => {
                write!(f, "Cannot resolve git branch, using 'unknown': {}", reason)
            }
            ResolutionWarning::ShaUnresolved { reason } => {
                write!(f, "Cannot resolve git sha, using 'unknown': {}", reason)
            }
            ResolutionWarning::InvalidPattern {
                option,
                pattern,
                reason,
            } => {
                // regex errors are multi-line; keep the last line only
                let reason = reason.lines().last().unwrap_or_default().trim();
                write!(
                    f,
                    "Ignoring invalid {} pattern '{}': {}",
                    option, pattern, reason
                )
            }
        }
    }
}

/// Patterns in `cfg` that fail to compile
pub fn invalid_patterns(cfg: &Configuration) -> Vec<ResolutionWarning> {
    let lists = [
        ("git-ref-ignore", &cfg.branch_ref_ignore),
        ("git-build-num-branch", &cfg.build_num_branch_allow),
    ];

    lists
        .into_iter()
        .flat_map(|(option, patterns)| {
            // any branch will do, only compilation matters here
            pattern::evaluate("", patterns.as_slice())
                .into_iter()
                .filter_map(move |outcome| match outcome.result {
                    Err(e) => Some(ResolutionWarning::InvalidPattern {
                        option,
                        pattern: outcome.pattern,
                        reason: e.to_string(),
                    }),
                    Ok(_) => None,
                })
        })
        .collect()
}
