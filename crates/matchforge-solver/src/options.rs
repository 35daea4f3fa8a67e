//! Solve options.
//!
//! The algorithm is proven to terminate, but callers feeding untrusted
//! matrices may still want a hard bound on solve work. Options load from
//! TOML so deployments can tune limits without code changes.
//!
//! # Examples
//!
//! ```
//! use matchforge_solver::SolveOptions;
//!
//! let options = SolveOptions::from_toml_str("step_limit = 10000").unwrap();
//! assert_eq!(options.step_limit, Some(10_000));
//!
//! let defaults = SolveOptions::default();
//! assert_eq!(defaults.step_limit, None);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options load error
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Tunable limits for a solve session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SolveOptions {
    /// Upper bound on covering and adjustment steps. `None` relies on the
    /// algorithm's own termination.
    #[serde(default)]
    pub step_limit: Option<u64>,
}

impl SolveOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the step limit.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Loads options from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses options from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(s)?)
    }
}
