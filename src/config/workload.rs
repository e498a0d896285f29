//! Run-shape definitions: when a run ends and how it paces output

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Completion criteria
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompletionMode {
    /// Run until the process is stopped
    Forever,
    /// Stop after a fixed number of lines
    Lines { count: u64 },
    /// Stop once the wall-clock duration has elapsed
    Duration { seconds: u64 },
}

impl Default for CompletionMode {
    fn default() -> Self {
        Self::Forever
    }
}

impl CompletionMode {
    /// Whether a run that has written `lines` over `elapsed` is finished
    pub fn is_done(&self, lines: u64, elapsed: Duration) -> bool {
        match *self {
            CompletionMode::Forever => false,
            CompletionMode::Lines { count } => lines >= count,
            CompletionMode::Duration { seconds } => elapsed >= Duration::from_secs(seconds),
        }
    }
}

/// Pacing mode between successive lines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PacingMode {
    Sleep,
    Spin,
}

impl Default for PacingMode {
    fn default() -> Self {
        Self::Sleep
    }
}

impl fmt::Display for CompletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionMode::Forever => write!(f, "forever"),
            CompletionMode::Lines { count } => write!(f, "lines({})", count),
            CompletionMode::Duration { seconds } => write!(f, "duration({}s)", seconds),
        }
    }
}

impl fmt::Display for PacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacingMode::Sleep => write!(f, "sleep"),
            PacingMode::Spin => write!(f, "spin"),
        }
    }
}
