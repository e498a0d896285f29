//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{convert_completion, convert_pacing_mode};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Build the effective configuration: file (if any), then CLI overrides
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    merge_cli_with_config(cli, base)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override generator settings
    if let Some(sessions) = cli.sessions {
        config.generator.sessions = sessions;
    }
    if let Some(length) = cli.session_length {
        config.generator.session_length = length;
    }
    if let Some(rate) = cli.rate {
        config.generator.rate = rate;
    }
    if cli.seed.is_some() {
        config.generator.seed = cli.seed;
    }

    // Override completion mode
    if let Some(completion) = convert_completion(cli)? {
        config.runtime.completion = completion;
    }

    // Override output settings
    if let Some(mode) = cli.pacing {
        config.runtime.pacing = convert_pacing_mode(mode);
    }
    if let Some(ref path) = cli.output {
        config.runtime.output = Some(path.clone());
    }
    if cli.append {
        config.runtime.append = true;
    }
    if cli.summary {
        config.runtime.summary = true;
    }

    Ok(config)
}
