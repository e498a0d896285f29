//! Output rate pacing
//!
//! Lines are spaced `1/qps` seconds apart plus a small random jitter so the
//! stream never looks perfectly uniform.

use crate::config::PacingMode;
use std::time::{Duration, Instant};

/// Upper bound (exclusive) of the per-line jitter, in seconds
pub const MAX_JITTER_SECS: f64 = 0.1;

/// Interval between lines at `qps`, if it is positive and representable
pub fn interval_for_rate(qps: f64) -> Option<Duration> {
    if !qps.is_finite() || qps <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(1.0 / qps).ok()
}

/// Computes and takes the pause between successive lines
#[derive(Debug, Clone)]
pub struct RatePacer {
    interval: Duration,
    max_jitter_secs: f64,
    mode: PacingMode,
}

impl RatePacer {
    /// Create a pacer targeting `qps` lines per second
    ///
    /// # Panics
    ///
    /// Panics unless `qps` is finite, positive and large enough for
    /// `1/qps` seconds to fit in a `Duration`.
    pub fn new(qps: f64) -> Self {
        let Some(interval) = interval_for_rate(qps) else {
            panic!("Rate must be a positive number with a representable interval, got {}", qps);
        };

        Self {
            interval,
            max_jitter_secs: MAX_JITTER_SECS,
            mode: PacingMode::Sleep,
        }
    }

    pub fn with_mode(mut self, mode: PacingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the jitter bound (0 disables jitter)
    pub fn with_max_jitter(mut self, max_jitter_secs: f64) -> Self {
        self.max_jitter_secs = max_jitter_secs.max(0.0);
        self
    }

    /// Base interval between lines (`1/qps`)
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_jitter_secs(&self) -> f64 {
        self.max_jitter_secs
    }

    pub fn mode(&self) -> PacingMode {
        self.mode
    }

    /// Total pause for a given jitter draw
    pub fn delay(&self, jitter_secs: f64) -> Duration {
        match Duration::try_from_secs_f64(jitter_secs) {
            Ok(jitter) => self.interval.saturating_add(jitter),
            Err(_) => self.interval,
        }
    }

    /// Block for `delay(jitter_secs)`
    pub fn pause(&self, jitter_secs: f64) {
        let duration = self.delay(jitter_secs);

        match self.mode {
            PacingMode::Sleep => {
                std::thread::sleep(duration);
            }
            PacingMode::Spin => {
                let start = Instant::now();
                while start.elapsed() < duration {
                    std::hint::spin_loop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        assert_eq!(RatePacer::new(30.0).interval(), Duration::from_secs_f64(1.0 / 30.0));
        assert_eq!(RatePacer::new(1.0).interval(), Duration::from_secs(1));
        assert_eq!(RatePacer::new(4.0).interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_delay_adds_jitter() {
        let pacer = RatePacer::new(10.0);
        assert_eq!(pacer.delay(0.0), Duration::from_millis(100));
        assert_eq!(pacer.delay(0.05), Duration::from_millis(100) + Duration::from_secs_f64(0.05));
        // Negative or non-finite jitter is ignored
        assert_eq!(pacer.delay(-1.0), Duration::from_millis(100));
        assert_eq!(pacer.delay(f64::NAN), Duration::from_millis(100));
    }

    #[test]
    fn test_builders() {
        let pacer = RatePacer::new(30.0)
            .with_mode(PacingMode::Spin)
            .with_max_jitter(-1.0);
        assert_eq!(pacer.mode(), PacingMode::Spin);
        assert_eq!(pacer.max_jitter_secs(), 0.0);
        assert_eq!(RatePacer::new(30.0).max_jitter_secs(), MAX_JITTER_SECS);
    }

    #[test]
    fn test_pause_sleep() {
        let pacer = RatePacer::new(100.0);
        let start = Instant::now();
        pacer.pause(0.0);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_pause_spin() {
        let pacer = RatePacer::new(200.0).with_mode(PacingMode::Spin);
        let start = Instant::now();
        pacer.pause(0.0);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    #[should_panic(expected = "Rate must be a positive number")]
    fn test_zero_rate_rejected() {
        let _ = RatePacer::new(0.0);
    }

    #[test]
    #[should_panic(expected = "representable interval")]
    fn test_tiny_rate_rejected() {
        let _ = RatePacer::new(1e-300);
    }

    #[test]
    fn test_interval_for_rate() {
        assert_eq!(interval_for_rate(2.0), Some(Duration::from_millis(500)));
        assert_eq!(interval_for_rate(0.25), Some(Duration::from_secs(4)));
        assert_eq!(interval_for_rate(0.0), None);
        assert_eq!(interval_for_rate(-1.0), None);
        assert_eq!(interval_for_rate(f64::NAN), None);
        assert_eq!(interval_for_rate(f64::INFINITY), None);
        assert_eq!(interval_for_rate(1e-300), None);
    }

    #[test]
    fn test_delay_ignores_unrepresentable_jitter() {
        let pacer = RatePacer::new(1.0);
        assert_eq!(pacer.delay(1e300), Duration::from_secs(1));
        assert_eq!(pacer.delay(f64::INFINITY), Duration::from_secs(1));
    }
}
