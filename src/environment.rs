use crate::error::{MkverError, Result};
use std::collections::HashMap;

/// Read access to environment variables
pub trait Environment {
    /// Value of `key`
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The variable is set
    /// * `Ok(None)` - The variable is unset
    /// * `Err(MkverError::NotUnicode)` - The variable is set but not valid unicode
    fn lookup(&self, key: &str) -> Result<Option<String>>;

    /// Value of `key`, or `None` when unset or unreadable
    fn var(&self, key: &str) -> Option<String> {
        self.lookup(key).ok().flatten()
    }

    /// Whether `key` is set at all, readable or not
    fn contains(&self, key: &str) -> bool {
        !matches!(self.lookup(key), Ok(None))
    }
}

/// The current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        match std::env::var_os(key) {
            None => Ok(None),
            Some(value) => value
                .into_string()
                .map(Some)
                .map_err(|_| MkverError::NotUnicode(key.to_string())),
        }
    }
}

/// Fixed set of variables, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for MapEnvironment {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        Ok(self.vars.get(key).cloned())
    }
}
