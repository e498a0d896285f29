//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::workload;
use anyhow::{Context, Result};

/// Parse a duration string (e.g., "60s", "5m", "1h") to seconds
pub fn parse_duration(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if s.ends_with("sec") || s.ends_with('s') {
        (s.trim_end_matches("sec").trim_end_matches('s'), 1u64)
    } else if s.ends_with("min") || s.ends_with('m') {
        (s.trim_end_matches("min").trim_end_matches('m'), 60)
    } else if s.ends_with("hr") || s.ends_with('h') {
        (s.trim_end_matches("hr").trim_end_matches('h'), 3600)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str.parse()
        .with_context(|| format!("Invalid duration format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Duration too large: {}", s))
}

/// Convert CLI PacingMode to workload PacingMode
pub fn convert_pacing_mode(cli_mode: cli::PacingMode) -> workload::PacingMode {
    match cli_mode {
        cli::PacingMode::Sleep => workload::PacingMode::Sleep,
        cli::PacingMode::Spin => workload::PacingMode::Spin,
    }
}

/// Completion mode requested on the command line, if any
pub fn convert_completion(cli: &cli::Cli) -> Result<Option<workload::CompletionMode>> {
    if let Some(count) = cli.count {
        return Ok(Some(workload::CompletionMode::Lines { count }));
    }

    if let Some(ref duration_str) = cli.duration {
        let seconds = parse_duration(duration_str).context("Invalid duration")?;
        return Ok(Some(workload::CompletionMode::Duration { seconds }));
    }

    Ok(None)
}
