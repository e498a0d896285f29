//! CLI argument parsing using clap

use crate::config::validator::MAX_SESSIONS;
use crate::generator::pacer::interval_for_rate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// LogPulse - Synthetic web access-log generator
///
/// Values given on the command line override the configuration file.
#[derive(Parser, Debug, Default)]
#[command(name = "logpulse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // === Generator Options ===
    /// Number of client sessions kept active at once [default: 100]
    #[arg(short = 's', long)]
    pub sessions: Option<usize>,

    /// Requests a session issues before it expires [default: 10]
    #[arg(short = 'l', long)]
    pub session_length: Option<u32>,

    /// Target output rate in lines per second [default: 30]
    #[arg(short = 'r', long)]
    pub rate: Option<f64>,

    /// Seed for a reproducible stream
    #[arg(long, env = "LOGPULSE_SEED")]
    pub seed: Option<u64>,

    // === Completion Options ===
    /// Stop after writing this many lines
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Stop after this long (e.g., 60s, 5m, 1h)
    #[arg(short = 'd', long)]
    pub duration: Option<String>,

    // === Output Options ===
    /// Output file (default: stdout)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Append to the output file instead of truncating it
    #[arg(long)]
    pub append: bool,

    /// Pacing mode between lines
    #[arg(long, value_enum)]
    pub pacing: Option<PacingMode>,

    /// Print an end-of-run summary to stderr
    #[arg(long)]
    pub summary: bool,

    // === Misc Options ===
    /// Validate and print the configuration, then exit
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Pacing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PacingMode {
    /// Sleep between lines
    Sleep,
    /// Busy-wait between lines (tighter spacing, burns a core)
    Spin,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.sessions == Some(0) {
            anyhow::bail!("sessions must be at least 1");
        }

        if let Some(sessions) = self.sessions {
            if sessions > MAX_SESSIONS {
                anyhow::bail!("sessions must be at most {}", MAX_SESSIONS);
            }
        }

        if self.session_length == Some(0) {
            anyhow::bail!("session_length must be at least 1");
        }

        if let Some(rate) = self.rate {
            if !rate.is_finite() || rate <= 0.0 {
                anyhow::bail!("rate must be a positive number");
            }
            if interval_for_rate(rate).is_none() {
                anyhow::bail!("rate {} is too low to pace", rate);
            }
        }

        if self.count.is_some() && self.duration.is_some() {
            anyhow::bail!("can only specify one of: --count or --duration");
        }

        if self.append && self.output.is_none() {
            anyhow::bail!("--append requires --output");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["logpulse"]).unwrap();
        assert!(cli.sessions.is_none());
        assert!(cli.rate.is_none());
        assert!(!cli.dry_run);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "logpulse", "-s", "5", "-l", "2", "-r", "100", "-n", "50", "--pacing", "spin",
        ])
        .unwrap();
        assert_eq!(cli.sessions, Some(5));
        assert_eq!(cli.session_length, Some(2));
        assert_eq!(cli.rate, Some(100.0));
        assert_eq!(cli.count, Some(50));
        assert_eq!(cli.pacing, Some(PacingMode::Spin));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_sessions() {
        let cli = Cli { sessions: Some(0), ..Default::default() };
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_too_many_sessions() {
        let cli = Cli { sessions: Some(MAX_SESSIONS + 1), ..Default::default() };
        assert!(cli.validate().is_err());

        let cli = Cli { sessions: Some(MAX_SESSIONS), ..Default::default() };
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_session_length() {
        let cli = Cli { session_length: Some(0), ..Default::default() };
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_rate() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e-300] {
            let cli = Cli { rate: Some(rate), ..Default::default() };
            assert!(cli.validate().is_err(), "rate {} should be rejected", rate);
        }
    }

    #[test]
    fn test_validate_completion_conflict() {
        let cli = Cli {
            count: Some(10),
            duration: Some("5s".to_string()),
            ..Default::default()
        };
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_append_without_output() {
        let cli = Cli { append: true, ..Default::default() };
        assert!(cli.validate().is_err());
    }
}
