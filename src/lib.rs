pub mod cli;
pub mod config;
pub mod domain;
pub mod environment;
pub mod error;
pub mod git;
pub mod properties;
pub mod resolve;
pub mod synthesis;
pub mod template;
pub mod ui;
pub mod warning;

pub use error::{MkverError, Result};
