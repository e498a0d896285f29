//! Human-readable text output
//!
//! Everything here goes to stderr; stdout carries the generated log stream.

use crate::config::Config;
use crate::generator::GeneratorStats;
use crate::util::time::{calculate_rate, format_bytes, format_duration, format_rate};
use std::time::Duration;

/// Render the effective configuration
pub fn format_configuration(config: &Config) -> String {
    let mut out = String::new();
    out.push_str("Configuration:\n");
    out.push_str("  Generator:\n");
    out.push_str(&format!("    Sessions: {}\n", config.generator.sessions));
    out.push_str(&format!("    Session length: {} requests\n", config.generator.session_length));
    out.push_str(&format!("    Rate: {} lines/s\n", config.generator.rate));
    if let Some(seed) = config.generator.seed {
        out.push_str(&format!("    Seed: {}\n", seed));
    }

    out.push_str("  Runtime:\n");
    out.push_str(&format!("    Completion: {}\n", config.runtime.completion));
    out.push_str(&format!("    Pacing: {}\n", config.runtime.pacing));
    match config.runtime.output {
        Some(ref path) => {
            let mode = if config.runtime.append { "append" } else { "truncate" };
            out.push_str(&format!("    Output: {} ({})\n", path.display(), mode));
        }
        None => out.push_str("    Output: stdout\n"),
    }

    let overridden = config.fields.overridden();
    if !overridden.is_empty() {
        out.push_str("  Fields:\n");
        out.push_str(&format!("    Overridden: {}\n", overridden.join(", ")));
    }

    out
}

/// Render the end-of-run summary
pub fn format_summary(stats: &GeneratorStats, elapsed: Duration) -> String {
    let mut out = String::new();
    out.push_str("═══════════════════════════════════════════════════════════\n");
    out.push_str("                      RUN SUMMARY\n");
    out.push_str("═══════════════════════════════════════════════════════════\n");
    out.push_str(&format!("Elapsed Time: {}\n", format_duration(elapsed)));
    out.push_str(&format!(
        "Lines:    {} ({}) - {} lines/s\n",
        stats.lines,
        format_bytes(stats.bytes),
        format_rate(calculate_rate(stats.lines, elapsed))
    ));
    out.push_str(&format!(
        "Sessions: {} created, {} expired\n",
        stats.sessions.created, stats.sessions.expired
    ));
    out
}

/// Print the configuration to stderr
pub fn print_configuration(config: &Config) {
    eprint!("{}", format_configuration(config));
}

/// Print the end-of-run summary to stderr
pub fn print_summary(stats: &GeneratorStats, elapsed: Duration) {
    eprintln!();
    eprint!("{}", format_summary(stats, elapsed));
}
