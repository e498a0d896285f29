//! Simulated client sessions
//!
//! The session manager keeps a bounded, churning population of client
//! identities (IPv4 addresses). Every call to
//! [`SessionManager::next_identity`] expires sessions that have used up
//! their request budget, refills the population back to its target size,
//! then picks one session uniformly at random and bumps its request count.
//!
//! # Population invariants
//!
//! - After every call the population holds exactly `target_population_size`
//!   sessions.
//! - Apart from the session just selected, no session in the population
//!   has a request count at or above `max_session_length` when a call
//!   returns. The selected one may reach the limit; it is expired on the
//!   next call.
//! - Identities are drawn independently. A fresh identity that collides
//!   with a live one replaces it with a zero count.
//!
//! # Example
//!
//! ```
//! use logpulse::session::SessionManager;
//!
//! let mut sessions = SessionManager::with_seed(100, 10, 42);
//! let ip = sessions.next_identity();
//! assert_eq!(sessions.len(), 100);
//! assert_eq!(sessions.request_count(ip), Some(1));
//! ```

use log::trace;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

/// Generate a random client address
///
/// The first octet is drawn from [1, 223] (no zero network, nothing in the
/// multicast/reserved space) and the remaining three from [0, 254].
/// Private and loopback blocks are reachable.
pub fn random_ip<R: Rng + ?Sized>(rng: &mut R) -> Ipv4Addr {
    let a = rng.gen_range(1..=223);
    let b = rng.gen_range(0..=254);
    let c = rng.gen_range(0..=254);
    let d = rng.gen_range(0..=254);
    Ipv4Addr::new(a, b, c, d)
}

/// Session churn counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Identities generated during refill (collisions included)
    pub created: u64,
    /// Sessions removed after reaching the length limit
    pub expired: u64,
}

/// Owns the active session population
pub struct SessionManager<R = Xoshiro256PlusPlus> {
    target_population_size: usize,
    max_session_length: u32,

    /// Identity -> request count. Ordered so a seeded source reproduces
    /// the same selection sequence.
    sessions: BTreeMap<Ipv4Addr, u32>,

    stats: SessionStats,
    rng: R,
}

impl SessionManager<Xoshiro256PlusPlus> {
    /// Create a session manager with a random seed
    pub fn new(target_population_size: usize, max_session_length: u32) -> Self {
        Self::with_rng(
            target_population_size,
            max_session_length,
            Xoshiro256PlusPlus::from_entropy(),
        )
    }

    /// Create a session manager with a specific seed
    pub fn with_seed(target_population_size: usize, max_session_length: u32, seed: u64) -> Self {
        Self::with_rng(
            target_population_size,
            max_session_length,
            Xoshiro256PlusPlus::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> SessionManager<R> {
    /// Create a session manager over an arbitrary random source
    ///
    /// # Panics
    ///
    /// Panics if either parameter is zero. An empty pool has nothing to
    /// select from and a zero-length session would never be usable.
    pub fn with_rng(target_population_size: usize, max_session_length: u32, rng: R) -> Self {
        assert!(target_population_size >= 1, "Session population size must be at least 1");
        assert!(max_session_length >= 1, "Session length must be at least 1");

        Self {
            target_population_size,
            max_session_length,
            sessions: BTreeMap::new(),
            stats: SessionStats::default(),
            rng,
        }
    }

    /// Hand out the identity for the next request
    pub fn next_identity(&mut self) -> Ipv4Addr {
        self.expire();
        self.refill();

        let index = self.rng.gen_range(0..self.sessions.len());
        let Some((ip, count)) = self.sessions.iter_mut().nth(index) else {
            unreachable!("population is refilled before selection");
        };
        *count += 1;
        *ip
    }

    fn expire(&mut self) {
        let limit = self.max_session_length;
        let before = self.sessions.len();
        self.sessions.retain(|_, count| *count < limit);

        let expired = before - self.sessions.len();
        if expired > 0 {
            trace!("expired {} sessions", expired);
            self.stats.expired += expired as u64;
        }
    }

    fn refill(&mut self) {
        while self.sessions.len() < self.target_population_size {
            let ip = random_ip(&mut self.rng);
            trace!("new session {}", ip);
            self.sessions.insert(ip, 0);
            self.stats.created += 1;
        }
    }

    /// Number of active sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Request count of an active session
    pub fn request_count(&self, ip: Ipv4Addr) -> Option<u32> {
        self.sessions.get(&ip).copied()
    }

    /// Active sessions and their request counts
    pub fn sessions(&self) -> impl Iterator<Item = (Ipv4Addr, u32)> + '_ {
        self.sessions.iter().map(|(ip, count)| (*ip, *count))
    }

    pub fn target_population_size(&self) -> usize {
        self.target_population_size
    }

    pub fn max_session_length(&self) -> u32 {
        self.max_session_length
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
