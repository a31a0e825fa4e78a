//! The stopwatch widget: a large time display over Start / Stop / Reset.
//!
//! All state lives in the widget. Two instances never share elapsed time,
//! phase, or tickers. Layout:
//!
//! | Piece | Behaviour |
//! |-------|-----------|
//! | Display | `HH:MM:SS:CC`, monospace, resampled every frame while running |
//! | Start | begins or resumes counting, installs a repaint ticker |
//! | Stop | pauses, keeping the elapsed value on screen |
//! | Reset | returns the display to zero from either phase |

use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Color32, RichText, Ui};

use kairos_core::{Clock, Stopwatch, SystemClock, format_elapsed};

use crate::ticker::RepaintTicker;

/// Sampling cadence while running. 10 ms matches the hundredths digit of
/// the display; scheduler jitter can make that digit visibly skip, which
/// is accepted.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(10);

const DISPLAY_SIZE: f32 = 44.0;
const BUTTON_SIZE: [f32; 2] = [70.0, 28.0];

const START_FILL: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
const STOP_FILL: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);

/// A self-contained stopwatch.
///
/// Holds the time-keeping machine, the clock it samples, and the repaint
/// ticker that drives the display. The ticker guard exists exactly while
/// the machine is running; every operation below maintains that pairing.
pub struct StopwatchWidget {
    stopwatch: Stopwatch,
    clock: Arc<dyn Clock>,
    ticker: Option<RepaintTicker>,
}

impl StopwatchWidget {
    /// Widget over the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Widget over a caller-supplied clock. Tests pass a
    /// [`ManualClock`](kairos_core::ManualClock) to step time explicitly.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            clock,
            ticker: None,
        }
    }

    /// Starts or resumes counting and installs a fresh repaint ticker.
    ///
    /// Any previous ticker is torn down first, so at most one sampler is
    /// live at any point, even when start is pressed mid-run.
    pub fn start(&mut self, wake: impl Fn() + Send + 'static) {
        self.ticker = None;
        self.stopwatch.start(self.clock.now_ms());
        self.ticker = Some(RepaintTicker::spawn(SAMPLE_PERIOD, wake));
        log::debug!("started at {} ms", self.elapsed_ms());
    }

    /// Pauses counting. The elapsed value keeps its last sampled reading.
    pub fn stop(&mut self) {
        self.stopwatch.stop();
        self.ticker = None;
        log::debug!("stopped at {} ms", self.elapsed_ms());
    }

    /// Zeroes the display and returns to idle, from either phase.
    pub fn reset(&mut self) {
        self.stopwatch.reset();
        self.ticker = None;
        log::debug!("reset");
    }

    /// Takes one display sample. Runs before button handling each frame,
    /// so the value a press acts on is at most one period stale.
    fn sample(&mut self) -> u64 {
        self.stopwatch.sample(self.clock.now_ms())
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.stopwatch.elapsed_ms()
    }

    /// True while a repaint ticker is installed. Tracks
    /// [`is_running`](Self::is_running) at every operation boundary.
    pub fn ticker_is_live(&self) -> bool {
        self.ticker.is_some()
    }
}

impl Default for StopwatchWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl egui::Widget for &mut StopwatchWidget {
    fn ui(self, ui: &mut Ui) -> egui::Response {
        let elapsed = self.sample();
        debug_assert!(
            self.ticker_is_live() == self.is_running(),
            "ticker must exist exactly while running"
        );

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format_elapsed(elapsed))
                    .monospace()
                    .size(DISPLAY_SIZE)
                    .strong(),
            );

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                // Center the row by hand; a nested horizontal does not
                // inherit the centered layout of its parent.
                let row_width =
                    3.0 * BUTTON_SIZE[0] + 2.0 * ui.spacing().item_spacing.x;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                if control_button(ui, "Start", Some(START_FILL)).clicked() {
                    let ctx = ui.ctx().clone();
                    self.start(move || ctx.request_repaint());
                }
                if control_button(ui, "Stop", Some(STOP_FILL)).clicked() {
                    self.stop();
                }
                if control_button(ui, "Reset", None).clicked() {
                    self.reset();
                }
            });
        })
        .response
    }
}

/// One control in the button row. `fill` colors the button and switches
/// its label to white; `None` keeps the theme's neutral look.
fn control_button(ui: &mut Ui, label: &str, fill: Option<Color32>) -> egui::Response {
    let text = match fill {
        Some(_) => RichText::new(label).color(Color32::WHITE),
        None => RichText::new(label),
    };
    let mut button = egui::Button::new(text);
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    ui.add_sized(BUTTON_SIZE, button)
}

// ── Tests ────────────────────────────────────────────────────────────────
