//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;
pub mod workload;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use workload::{CompletionMode, PacingMode};

/// Complete generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub fields: FieldsConfig,
}

/// Session population and output rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of sessions kept active at once
    #[serde(default = "default_sessions")]
    pub sessions: usize,
    /// Requests a session may issue before it expires
    #[serde(default = "default_session_length")]
    pub session_length: u32,
    /// Target lines per second
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Seed for a reproducible stream
    pub seed: Option<u64>,
}

fn default_sessions() -> usize {
    100
}

fn default_session_length() -> u32 {
    10
}

fn default_rate() -> f64 {
    30.0
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sessions: default_sessions(),
            session_length: default_session_length(),
            rate: default_rate(),
            seed: None,
        }
    }
}

/// Runtime behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// When the run ends
    #[serde(default)]
    pub completion: CompletionMode,
    /// How the pause between lines is taken
    #[serde(default)]
    pub pacing: PacingMode,
    /// Output file (stdout when unset)
    pub output: Option<PathBuf>,
    /// Append to the output file instead of truncating it
    #[serde(default)]
    pub append: bool,
    /// Print an end-of-run summary to stderr
    #[serde(default)]
    pub summary: bool,
}

/// One `{ value, weight }` row of a field table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry<T> {
    pub value: T,
    pub weight: u32,
}

/// Optional overrides for the field tables
///
/// Tables left unset keep their standard contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldsConfig {
    pub user_agents: Option<Vec<FieldEntry<String>>>,
    pub paths: Option<Vec<FieldEntry<String>>>,
    pub files: Option<Vec<FieldEntry<String>>>,
    pub extensions: Option<Vec<FieldEntry<String>>>,
    pub status_codes: Option<Vec<FieldEntry<u16>>>,
}

impl FieldsConfig {
    /// Names of the tables that carry overrides
    pub fn overridden(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.user_agents.is_some() {
            names.push("user_agents");
        }
        if self.paths.is_some() {
            names.push("paths");
        }
        if self.files.is_some() {
            names.push("files");
        }
        if self.extensions.is_some() {
            names.push("extensions");
        }
        if self.status_codes.is_some() {
            names.push("status_codes");
        }
        names
    }
}
