//! Request generations
//!
//! Each request reserves fresh numbers from a shared, monotonically
//! increasing counter before it is spawned, so dispatch order decides which
//! request is newest. The working-status tracker remembers the highest
//! number per operation kind and ignores actions carrying an older one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGenerations {
    counter: Arc<AtomicU64>,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next generation, starting at 1 (0 means "never started")
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Reserve generations for one request and, if it chains, its follow-up
    pub fn ticket(&self, chained: bool) -> RequestTicket {
        let primary = self.next();
        RequestTicket {
            primary,
            chained: chained.then(|| self.next()),
        }
    }
}

/// Generations reserved for one request before it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub primary: u64,
    pub chained: Option<u64>,
}
