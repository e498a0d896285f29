//! LogPulse - Synthetic web access-log generator
//!
//! LogPulse fabricates plausible web-server access-log lines at a steady
//! rate, as sample data for log-processing pipelines.
//!
//! # Architecture
//!
//! - **Sessions**: a bounded, churning population of client IPs
//! - **Weighted sampling**: categorical fields drawn in proportion to weight
//! - **Generator**: assembles, writes and paces log lines
//! - **Configuration**: CLI flags layered over an optional TOML file

pub mod config;
pub mod distribution;
pub mod generator;
pub mod output;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use distribution::{WeightedDistribution, WeightedSampler};
pub use generator::{LogEntry, LogGenerator};
pub use session::SessionManager;

/// Result type used throughout LogPulse
pub type Result<T> = anyhow::Result<T>;
