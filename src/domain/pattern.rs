//! Branch matching against ordered lists of regular-expression fragments.
//!
//! A pattern "matches" when it finds a match anywhere in the branch name; anchoring
//! is up to the pattern itself (`^release`, `^develop$`). A pattern that fails to
//! compile never matches, but its error is kept in the [PatternOutcome] so callers
//! can report it.

use regex::Regex;

/// Result of testing one pattern against a branch name
#[derive(Debug, Clone)]
pub struct PatternOutcome {
    pub pattern: String,
    pub result: Result<bool, regex::Error>,
}

impl PatternOutcome {
    /// True only for a pattern that compiled and matched
    pub fn is_match(&self) -> bool {
        matches!(self.result, Ok(true))
    }

    pub fn is_invalid(&self) -> bool {
        self.result.is_err()
    }
}

/// Test every pattern against `branch`, in order.
pub fn evaluate<S: AsRef<str>>(branch: &str, patterns: &[S]) -> Vec<PatternOutcome> {
    patterns
        .iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            PatternOutcome {
                pattern: pattern.to_string(),
                result: Regex::new(pattern).map(|re| re.is_match(branch)),
            }
        })
        .collect()
}

/// True iff at least one pattern matches somewhere in `branch`.
///
/// Malformed patterns count as no match.
pub fn matches<S: AsRef<str>>(branch: &str, patterns: &[S]) -> bool {
    evaluate(branch, patterns).iter().any(PatternOutcome::is_match)
}
