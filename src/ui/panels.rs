use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::las::HeaderItem;
use crate::data::loader::LAS_EXTENSIONS;
use crate::data::selection::CurveSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – upload, curve and depth controls
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("LAS file");
    if ui.button("Upload a LAS file…").clicked() {
        open_file_dialog(state);
    }
    ui.small("…or drop a .las file onto the window.");

    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(msg).color(Color32::RED));
    }
    ui.separator();

    let Some(session) = &state.log else {
        ui.label("No log loaded.");
        return;
    };

    // Snapshot what the widgets need so `state` can be mutated below.
    let curve_names = session.table.curve_names();
    let default_curves = CurveSelection::default_for(&session.table).names().to_vec();
    let selected: Vec<String> = session.selection.names().to_vec();
    let extent = session.table.depth_extent();
    let mut top = session.bounds.min;
    let mut bottom = session.bounds.max;
    let depth_unit = session.table.depth_unit.clone();

    ui.heading("Settings");

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Curve multi-select ----
            ui.strong("Select Curves to Plot");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_curves();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_curves();
                }
                if ui.small_button("Default").clicked() {
                    if let Err(e) = state.set_curves(&default_curves) {
                        log::warn!("{e}");
                    }
                }
            });

            if selected.is_empty() {
                ui.weak("(none selected)");
            } else {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    for (i, name) in selected.iter().enumerate() {
                        ui.label(RichText::new(format!("{}. {name}", i + 1)).monospace());
                    }
                });
            }

            for name in &curve_names {
                let mut checked = selected.contains(name);
                if ui.checkbox(&mut checked, name.as_str()).changed() {
                    state.toggle_curve(name);
                }
            }
            ui.separator();

            // ---- Depth range ----
            ui.strong(format!("Depth Range ({depth_unit})"));
            let range = extent.min..=extent.max;
            ui.horizontal(|ui: &mut Ui| {
                let top_edit = ui.add(egui::DragValue::new(&mut top).range(range.clone()));
                ui.label("to");
                let bottom_edit = ui.add(egui::DragValue::new(&mut bottom).range(range.clone()));
                apply_depth_edit(
                    state,
                    top_edit.changed().then_some(top),
                    bottom_edit.changed().then_some(bottom),
                );
            });
            let top_slider = ui.add(egui::Slider::new(&mut top, range.clone()).text("Top"));
            let bottom_slider = ui.add(egui::Slider::new(&mut bottom, range).text("Bottom"));
            apply_depth_edit(
                state,
                top_slider.changed().then_some(top),
                bottom_slider.changed().then_some(bottom),
            );
            if ui.small_button("Full extent").clicked() {
                state.reset_depth_bounds();
            }
            ui.separator();

            if let Some(session) = &state.log {
                egui::CollapsingHeader::new(RichText::new("Well information").strong())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        if let Some(vers) = session.table.las_version() {
                            ui.label(format!("LAS version {vers}"));
                        }
                        if let Some(null) = session.table.null_value {
                            ui.label(format!("NULL value {null} (shown as gaps)"));
                        }
                        header_table(ui, "well_items", &session.table.well);
                    });

                egui::CollapsingHeader::new(RichText::new("Curves").strong())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        let rows: Vec<HeaderItem> = session
                            .table
                            .curves
                            .iter()
                            .map(|c| HeaderItem {
                                mnemonic: c.name.clone(),
                                unit: c.unit.clone(),
                                value: String::new(),
                                description: c.description.clone(),
                            })
                            .collect();
                        header_table(ui, "curve_items", &rows);
                    });

                if !session.table.parameters.is_empty() {
                    egui::CollapsingHeader::new(RichText::new("Parameters").strong())
                        .default_open(false)
                        .show(ui, |ui: &mut Ui| {
                            header_table(ui, "parameter_items", &session.table.parameters);
                        });
                }

                if !session.table.other.is_empty() {
                    egui::CollapsingHeader::new(RichText::new("Other").strong())
                        .default_open(false)
                        .show(ui, |ui: &mut Ui| {
                            ui.label(RichText::new(&session.table.other).monospace());
                        });
                }
            }
        });
}

/// Push edited depth handles into the state. Each handle clamps against the
/// other, so typed and dragged values follow the same rule.
fn apply_depth_edit(state: &mut AppState, top: Option<f64>, bottom: Option<f64>) {
    if let Some(top) = top {
        state.set_depth_min(top);
    }
    if let Some(bottom) = bottom {
        state.set_depth_max(bottom);
    }
}

/// Read-only table of header lines.
fn header_table(ui: &mut Ui, id: &str, items: &[HeaderItem]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .header(18.0, |mut header| {
                for title in ["Mnemonic", "Unit", "Value", "Description"] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for item in items {
                    body.row(16.0, |mut row| {
                        for text in [&item.mnemonic, &item.unit, &item.value, &item.description] {
                            row.col(|ui: &mut Ui| {
                                ui.label(text.as_str());
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(session) = &state.log {
            let table = &session.table;
            let extent = table.depth_extent();
            let well = table.well_value("WELL").unwrap_or("unnamed well");
            ui.label(format!(
                "{} ({well}): {} depth steps, {} curves, {} {} – {} {}, {} in window",
                session.name,
                table.len(),
                table.curves.len(),
                extent.min,
                table.depth_unit,
                extent.max,
                table.depth_unit,
                session.samples_in_window(),
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open LAS well log")
        .add_filter("LAS files", LAS_EXTENSIONS)
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
