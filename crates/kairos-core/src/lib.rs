//! Time logic for the **kairos** stopwatch.
//!
//! This crate is intentionally dependency-free so the state machine and
//! formatting can be tested and reused without pulling in GUI or event-loop
//! code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`clock`] | `Clock`, `SystemClock`, `ManualClock` |
//! | [`stopwatch`] | `Stopwatch`, `Phase` |
//! | [`format`] | `format_elapsed` |
//!
//! # Quick start
//!
//! ```rust
//! use kairos_core::{format_elapsed, Stopwatch};
//!
//! let mut sw = Stopwatch::new();
//! sw.start(0);
//! sw.sample(1_500);
//! sw.stop();
//! assert_eq!(format_elapsed(sw.elapsed_ms()), "00:00:01:50");
//! ```

pub mod clock;
pub mod format;
pub mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::format_elapsed;
pub use stopwatch::{Phase, Stopwatch};

#[cfg(test)]
mod scenario_tests {
    //! Operation sequences driven end to end through a simulated clock.

    use super::*;

    const TICK_MS: u64 = 10;

    /// Advance `clock` and feed one sample to `sw` per tick period.
    fn run_ticks(sw: &mut Stopwatch, clock: &ManualClock, ticks: u64) {
        for _ in 0..ticks {
            clock.advance(TICK_MS);
            sw.sample(clock.now_ms());
        }
    }

    #[test]
    fn run_then_stop_lands_on_the_sampled_value() {
        let clock = ManualClock::new(1_700_000_000_000);
        let mut sw = Stopwatch::new();

        sw.start(clock.now_ms());
        run_ticks(&mut sw, &clock, 50); // 500 ms of ticks
        sw.stop();

        assert_eq!(sw.elapsed_ms(), 500);

        // A tick that lands after stop leaves the value untouched.
        clock.advance(1_000);
        sw.sample(clock.now_ms());
        assert_eq!(sw.elapsed_ms(), 500);
    }

    #[test]
    fn pause_and_resume_accumulates_across_segments() {
        let clock = ManualClock::new(1_700_000_000_000);
        let mut sw = Stopwatch::new();

        sw.start(clock.now_ms());
        run_ticks(&mut sw, &clock, 30); // 300 ms
        sw.stop();

        clock.advance(5_000); // paused time must not count

        sw.start(clock.now_ms());
        run_ticks(&mut sw, &clock, 20); // 200 ms
        sw.stop();

        assert_eq!(sw.elapsed_ms(), 500);
    }

    #[test]
    fn reset_zeroes_and_a_late_tick_stays_dead() {
        let clock = ManualClock::new(1_700_000_000_000);
        let mut sw = Stopwatch::new();

        sw.start(clock.now_ms());
        run_ticks(&mut sw, &clock, 10);
        sw.reset();

        assert_eq!(sw.phase(), Phase::Idle);
        assert_eq!(sw.elapsed_ms(), 0);

        clock.advance(TICK_MS);
        sw.sample(clock.now_ms());
        assert_eq!(sw.elapsed_ms(), 0);
    }

    #[test]
    fn display_follows_the_machine() {
        let clock = ManualClock::new(0);
        let mut sw = Stopwatch::new();

        sw.start(clock.now_ms());
        clock.advance(3_661_500);
        sw.sample(clock.now_ms());

        assert_eq!(format_elapsed(sw.elapsed_ms()), "01:01:01:50");
    }
}
