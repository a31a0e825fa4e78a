//! The stopwatch state machine.

// ── Phase ─────────────────────────────────────────────────────────────────

/// Phase of a [`Stopwatch`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Not accumulating. Elapsed time may be nonzero when paused.
    Idle,
    /// Accumulating; a sampler should be driving [`Stopwatch::sample`].
    Running,
}

// ── Stopwatch ─────────────────────────────────────────────────────────────

/// Pause-preserving stopwatch over caller-supplied clock readings.
///
/// Methods take plain epoch-millisecond values, so the machine is fully
/// deterministic under test. The owning component reads a
/// [`Clock`](crate::Clock) and drives [`sample`](Self::sample) periodically
/// while running.
///
/// # Example
/// ```
/// use kairos_core::{Phase, Stopwatch};
///
/// let mut sw = Stopwatch::new();
/// sw.start(10_000);
/// assert_eq!(sw.sample(10_500), 500);
///
/// sw.stop();
/// assert_eq!(sw.phase(), Phase::Idle);
///
/// // Resume: the reference is recomputed so accumulation continues.
/// sw.start(20_000);
/// assert_eq!(sw.sample(20_300), 800);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    /// Accumulated run time in milliseconds.
    elapsed_ms: u64,
    /// Epoch instant at which the current run segment reads zero.
    /// `Some` exactly while running.
    start_reference_ms: Option<u64>,
}

impl Stopwatch {
    /// A stopwatch in `Idle` with zero elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Running`, anchoring the run so prior accumulation is kept.
    ///
    /// The start reference becomes `now - elapsed`: the instant at which the
    /// clock would have read zero elapsed. Starting while already running
    /// re-anchors to the last sampled value, a no-op in outcome; a caller
    /// that owns a sampler must replace it rather than add another.
    pub fn start(&mut self, now_ms: u64) {
        self.start_reference_ms = Some(now_ms.saturating_sub(self.elapsed_ms));
    }

    /// Leave `Running`. Elapsed time keeps its last sampled value.
    pub fn stop(&mut self) {
        self.start_reference_ms = None;
    }

    /// Return to `Idle` with zero elapsed time, from either phase.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.start_reference_ms = None;
    }

    /// Recompute elapsed time from `now_ms` and return it.
    ///
    /// While idle this is a no-op returning the held value, so a tick that
    /// was already queued when stop or reset landed cannot mutate state.
    /// The subtraction saturates: a wall clock stepping backwards past the
    /// reference reads as zero elapsed, never as an underflow.
    pub fn sample(&mut self, now_ms: u64) -> u64 {
        if let Some(reference) = self.start_reference_ms {
            self.elapsed_ms = now_ms.saturating_sub(reference);
        }
        self.elapsed_ms
    }

    /// Elapsed milliseconds as of the last sample (or reset).
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.start_reference_ms.is_some()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.is_running() { Phase::Running } else { Phase::Idle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── transitions ───────────────────────────────────────────────────────

    #[test]
    fn new_is_idle_at_zero() {
        let sw = Stopwatch::new();
        assert_eq!(sw.phase(), Phase::Idle);
        assert_eq!(sw.elapsed_ms(), 0);
    }

    #[test]
    fn start_enters_running() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        assert_eq!(sw.phase(), Phase::Running);
        assert!(sw.is_running());
    }

    #[test]
    fn stop_returns_to_idle_and_keeps_elapsed() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        sw.sample(1_400);
        sw.stop();
        assert_eq!(sw.phase(), Phase::Idle);
        assert_eq!(sw.elapsed_ms(), 400);
    }

    #[test]
    fn reset_zeroes_from_running() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        sw.sample(2_000);
        sw.reset();
        assert_eq!(sw.phase(), Phase::Idle);
        assert_eq!(sw.elapsed_ms(), 0);
    }

    #[test]
    fn reset_zeroes_from_idle() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        sw.sample(1_250);
        sw.stop();
        sw.reset();
        assert_eq!(sw.elapsed_ms(), 0);
    }

    #[test]
    fn machine_is_reusable_after_reset() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        sw.sample(1_500);
        sw.reset();
        sw.start(9_000);
        assert_eq!(sw.sample(9_100), 100);
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn sample_tracks_the_clock_while_running() {
        let mut sw = Stopwatch::new();
        sw.start(5_000);
        assert_eq!(sw.sample(5_010), 10);
        assert_eq!(sw.sample(5_250), 250);
        assert_eq!(sw.sample(6_000), 1_000);
    }

    #[test]
    fn sample_is_a_no_op_while_idle() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.sample(99_999), 0);
        assert_eq!(sw.elapsed_ms(), 0);
    }

    #[test]
    fn sample_after_stop_does_not_mutate() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        sw.sample(1_300);
        sw.stop();
        assert_eq!(sw.sample(50_000), 300);
        assert_eq!(sw.elapsed_ms(), 300);
    }

    #[test]
    fn sample_saturates_on_clock_regression() {
        let mut sw = Stopwatch::new();
        sw.start(10_000);
        sw.sample(10_500);
        // Wall clock stepped backwards past the reference.
        assert_eq!(sw.sample(9_000), 0);
    }

    // ── pause / resume ────────────────────────────────────────────────────

    #[test]
    fn resume_preserves_accumulation() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        sw.sample(1_300);
        sw.stop();

        // 5 s pass while paused; they must not count.
        sw.start(6_300);
        assert_eq!(sw.sample(6_500), 500);
    }

    #[test]
    fn start_while_running_is_idempotent_in_outcome() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        sw.sample(1_200);
        sw.start(1_200);
        assert_eq!(sw.phase(), Phase::Running);
        assert_eq!(sw.sample(1_500), 500);
    }
}
