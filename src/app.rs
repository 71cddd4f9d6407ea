use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LogViewerApp {
    pub state: AppState,
}

impl LogViewerApp {
    /// Ingest the first file dropped onto the window this frame, if any.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if let Some(bytes) = &file.bytes {
            self.state.ingest_upload(&file.name, bytes);
        } else if let Some(path) = &file.path {
            self.state.load_path(path);
        } else {
            log::warn!("Dropped file {:?} carried neither bytes nor a path", file.name);
        }
    }
}

impl eframe::App for LogViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: upload + settings ----
        egui::SidePanel::left("settings_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: depth tracks ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::main_panel(ui, &self.state);
        });
    }
}
