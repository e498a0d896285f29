//! Log line assembly and the output loop
//!
//! The generator is strictly single-threaded: one session lookup, a handful
//! of sampler draws, one formatted write and one pacing pause per line.
//!
//! # Example
//!
//! ```
//! use logpulse::distribution::{FieldCatalog, WeightedSampler};
//! use logpulse::generator::LogGenerator;
//! use logpulse::session::SessionManager;
//!
//! let mut generator = LogGenerator::new(
//!     SessionManager::with_seed(100, 10, 1),
//!     WeightedSampler::with_seed(2),
//!     FieldCatalog::standard(),
//! );
//!
//! let mut out: Vec<u8> = Vec::new();
//! generator.write(&mut out, 3).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
//! ```

pub mod clock;
pub mod entry;
pub mod pacer;

pub use clock::{Clock, FixedClock, LocalClock};
pub use entry::LogEntry;
pub use pacer::RatePacer;

use crate::config::{CompletionMode, Config};
use crate::distribution::{FieldCatalog, WeightedSampler};
use crate::session::{SessionManager, SessionStats};
use anyhow::{Context, Result};
use log::debug;
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::io::Write;
use std::ops::Range;
use std::time::Instant;

/// Response sizes are drawn uniformly from this range
pub const RESPONSE_SIZE_RANGE: Range<u32> = 192..2240;

/// Counters for a generator's lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorStats {
    /// Lines written
    pub lines: u64,
    /// Bytes written, newlines included
    pub bytes: u64,
    /// Session churn
    pub sessions: SessionStats,
}

/// Assembles and writes access-log lines
pub struct LogGenerator<R = Xoshiro256PlusPlus> {
    sessions: SessionManager<R>,
    sampler: WeightedSampler<R>,
    catalog: FieldCatalog,
    clock: Box<dyn Clock>,
    lines: u64,
    bytes: u64,
}

impl LogGenerator<Xoshiro256PlusPlus> {
    /// Build a generator from validated configuration
    ///
    /// With a configured seed the session manager and the sampler get
    /// distinct, deterministic streams.
    pub fn from_config(config: &Config) -> Result<Self> {
        let generator = &config.generator;
        let catalog = FieldCatalog::from_config(&config.fields)
            .context("Failed to build field tables")?;

        let (sessions, sampler) = match generator.seed {
            Some(seed) => (
                SessionManager::with_seed(generator.sessions, generator.session_length, seed),
                WeightedSampler::with_seed(seed.wrapping_add(1)),
            ),
            None => (
                SessionManager::new(generator.sessions, generator.session_length),
                WeightedSampler::new(),
            ),
        };

        Ok(Self::new(sessions, sampler, catalog))
    }
}

impl<R: Rng> LogGenerator<R> {
    /// Create a generator stamping lines with local time
    pub fn new(sessions: SessionManager<R>, sampler: WeightedSampler<R>, catalog: FieldCatalog) -> Self {
        Self {
            sessions,
            sampler,
            catalog,
            clock: Box::new(LocalClock),
            lines: 0,
            bytes: 0,
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Assemble the next line's fields
    pub fn next_entry(&mut self) -> LogEntry {
        let ip = self.sessions.next_identity();
        let extension = self.sampler.sample(&self.catalog.extensions).clone();
        let status = *self.sampler.sample(&self.catalog.status_codes);
        let size = self.sampler.uniform(RESPONSE_SIZE_RANGE);
        let user_agent = self.sampler.sample(&self.catalog.user_agents).clone();
        let path = self.sampler.sample(&self.catalog.paths).clone();
        let file = self.sampler.sample(&self.catalog.files).clone();

        LogEntry {
            ip,
            user_agent,
            timestamp: self.clock.now(),
            path,
            file,
            extension,
            status,
            size,
        }
    }

    /// Write `count` newline-terminated lines to `dest`, then flush
    pub fn write<W: Write + ?Sized>(&mut self, dest: &mut W, count: usize) -> Result<()> {
        for _ in 0..count {
            let line = format!("{}\n", self.next_entry());
            dest.write_all(line.as_bytes())
                .context("Failed to write log line")?;
            self.lines += 1;
            self.bytes += line.len() as u64;
        }

        dest.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Write paced lines until `completion` is reached
    ///
    /// With [`CompletionMode::Forever`] this only returns on a write error.
    pub fn run<W: Write + ?Sized>(
        &mut self,
        dest: &mut W,
        pacer: &RatePacer,
        completion: CompletionMode,
    ) -> Result<GeneratorStats> {
        debug!(
            "starting run: interval {:?}, completion {}, pacing {}",
            pacer.interval(),
            completion,
            pacer.mode()
        );

        let start = Instant::now();
        let mut written = 0u64;

        while !completion.is_done(written, start.elapsed()) {
            self.write(dest, 1)?;
            written += 1;

            if completion.is_done(written, start.elapsed()) {
                break;
            }
            let jitter = self.sampler.jitter(pacer.max_jitter_secs());
            pacer.pause(jitter);
        }

        debug!("run finished after {} lines", written);
        Ok(self.stats())
    }

    pub fn stats(&self) -> GeneratorStats {
        GeneratorStats {
            lines: self.lines,
            bytes: self.bytes,
            sessions: self.sessions.stats(),
        }
    }

    pub fn sessions(&self) -> &SessionManager<R> {
        &self.sessions
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }
}
