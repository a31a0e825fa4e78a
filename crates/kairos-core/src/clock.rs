//! Wall-clock abstraction.
//!
//! The stopwatch never reads the OS clock itself; owners take a reading from
//! a [`Clock`] and pass it in. Production code uses [`SystemClock`]; tests
//! drive the machine through a [`ManualClock`] they advance by hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// ── Clock ─────────────────────────────────────────────────────────────────

/// Source of wall-clock readings, in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Current wall-clock reading.
    fn now_ms(&self) -> u64;
}

// ── SystemClock ───────────────────────────────────────────────────────────

/// The system wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // A system time before the Unix epoch reads as zero.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

// ── ManualClock ───────────────────────────────────────────────────────────

/// A hand-advanced clock for deterministic tests.
///
/// Interior mutability lets the test hold one handle and advance it while
/// the component under test reads through `&dyn Clock`.
///
/// # Example
/// ```
/// use kairos_core::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(250);
/// assert_eq!(clock.now_ms(), 1_250);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self { now: AtomicU64::new(now_ms) }
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::Relaxed);
    }

    /// Set an absolute reading. May move the clock backwards.
    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}
