//! Domain logic - pure version rules independent of git, environment and files

pub mod branch;
pub mod configuration;
pub mod pattern;
pub mod profile;
pub mod segment;
pub mod version;

pub use branch::BranchContext;
pub use configuration::{ConfigOverrides, Configuration, ShaPlacement};
pub use pattern::PatternOutcome;
pub use profile::Profile;
pub use segment::ShaSegment;
pub use version::{QualifierMode, RawVersion};
