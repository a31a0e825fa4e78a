//! Application shell: one stopwatch widget in a central panel.

use eframe::egui;

use crate::widget::StopwatchWidget;

/// Top-level application state.
///
/// Owns the single widget for the window's lifetime. Closing the window
/// drops the app, which tears down the widget and any live ticker with it.
pub struct KairosApp {
    stopwatch: StopwatchWidget,
}

impl KairosApp {
    pub fn new() -> Self {
        Self {
            stopwatch: StopwatchWidget::new(),
        }
    }
}

impl Default for KairosApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for KairosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            ui.add(&mut self.stopwatch);
        });
    }
}
