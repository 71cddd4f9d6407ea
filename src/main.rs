mod app;
mod color;
mod data;
mod figure;
mod state;
mod ui;

use app::LogViewerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 960.0])
            .with_min_inner_size([700.0, 500.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "LAS Log Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(LogViewerApp::default()))),
    )
}
