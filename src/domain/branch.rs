/// Branch name used when no source could resolve one
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Represents a git branch with context
///
/// The raw name is kept as resolved (case and `/` intact) for pattern matching;
/// [BranchContext::slug] is the form that ends up in a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
}

impl BranchContext {
    /// Create a new branch context
    pub fn new(name: impl Into<String>) -> Self {
        BranchContext { name: name.into() }
    }

    /// Lower-cased name with every `/` replaced by `-`
    pub fn slug(&self) -> String {
        self.name.replace('/', "-").to_lowercase()
    }
}
