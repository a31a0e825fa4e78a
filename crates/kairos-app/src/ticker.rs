//! Periodic repaint scheduling.
//!
//! egui repaints lazily, so while the stopwatch runs something has to wake
//! the event loop every sampling period. [`RepaintTicker`] is that
//! something: a guard around a background thread that invokes a wake
//! callback at a fixed cadence until the guard is dropped.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Owned handle to a periodic wake thread.
///
/// At most one ticker should be live per stopwatch; the owner tears the old
/// guard down before installing a fresh one. Dropping the guard blocks
/// until the thread has exited, so a dropped ticker can never fire again.
///
/// The cadence is a resolution choice, not a precision guarantee. The
/// thread sleeps through the OS scheduler and jitter is expected.
pub struct RepaintTicker {
    cancel: Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl RepaintTicker {
    /// Spawns a thread that invokes `wake` every `period` until the
    /// returned guard is dropped.
    pub fn spawn(period: Duration, wake: impl Fn() + Send + 'static) -> Self {
        let (cancel, cancelled) = mpsc::channel::<()>();

        let thread = std::thread::spawn(move || {
            log::trace!("repaint ticker up ({period:?})");
            loop {
                // The receive timeout doubles as the tick period. A cancel
                // message, or the sender dropping, ends the loop without
                // waiting the period out.
                match cancelled.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => wake(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            log::trace!("repaint ticker down");
        });

        Self {
            cancel,
            thread: Some(thread),
        }
    }
}

impl Drop for RepaintTicker {
    fn drop(&mut self) {
        let _ = self.cancel.send(());
        if let Some(thread) = self.thread.take() {
            thread.join().ok();
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
