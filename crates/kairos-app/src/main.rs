//! Kairos: a desktop stopwatch.
//!
//! Binary entry point. Wires the stopwatch widget into an `eframe` window;
//! everything interesting lives in [`widget`] and in the `kairos-core`
//! crate underneath it.

use eframe::egui;

mod app;
mod logging;
mod ticker;
mod widget;

use app::KairosApp;

const WINDOW_SIZE: [f32; 2] = [360.0, 200.0];

fn main() -> eframe::Result<()> {
    logging::init_logging();

    // Startup banner, printed before the window opens.
    println!();
    println!("  ╔══════════════════════════════════╗");
    println!("  ║        K A I R O S   v0.1        ║");
    println!("  ║   stopwatch  ·  eframe window    ║");
    println!("  ╚══════════════════════════════════╝");
    println!();

    log::info!("starting event loop");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_SIZE),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Kairos",
        options,
        Box::new(|_cc| Box::new(KairosApp::new())),
    )
}
