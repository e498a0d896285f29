//! Weighted categorical distributions
//!
//! This module provides the weighted sampling used to synthesize every
//! categorical field of a log line (user agent, path, file, extension and
//! status code). A distribution is a fixed, ordered list of `(value, weight)`
//! pairs; the sampler draws a value with probability `weight / total`.
//!
//! # Ordering
//!
//! Distributions keep their insertion order. The cumulative walk relies on
//! it, and so does the fallback that returns the first entry when a draw
//! lands outside every range.
//!
//! # Example
//!
//! ```
//! use logpulse::distribution::{WeightedDistribution, WeightedSampler};
//!
//! let extensions = WeightedDistribution::new(vec![
//!     ("html", 70),
//!     ("png", 15),
//!     ("gif", 10),
//!     ("css", 5),
//! ]).unwrap();
//!
//! let mut sampler = WeightedSampler::with_seed(42);
//! let ext = sampler.sample(&extensions);
//! assert!(["html", "png", "gif", "css"].contains(ext));
//! ```

pub mod catalog;
pub mod weighted;

pub use catalog::FieldCatalog;
pub use weighted::{DistributionError, WeightedDistribution, WeightedSampler};
