use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::figure::{Track, TrackFigure};
use crate::state::{AppState, MainView};

/// Tracks never get narrower than this; the row scrolls instead.
const MIN_TRACK_WIDTH: f32 = 120.0;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the central panel for the current session state.
pub fn main_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Multi-Track Log Visualizer");
    ui.separator();

    match state.view() {
        MainView::AwaitingUpload => {
            notice(ui, "Awaiting LAS file upload. Please upload a file in the sidebar.");
        }
        MainView::UploadFailed(msg) | MainView::RenderFailed(msg) => {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        MainView::SelectCurve => {
            notice(
                ui,
                "Please select at least one curve from the sidebar.",
            );
        }
        MainView::Tracks(figure) => track_figure(ui, &figure),
    }
}

fn notice(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(text);
    });
}

// ---------------------------------------------------------------------------
// Depth tracks
// ---------------------------------------------------------------------------

/// Lay the tracks out side by side.
///
/// egui_plot has no inverted axes, so depth is plotted as `-depth` and the
/// tick labels are negated back.
fn track_figure(ui: &mut Ui, figure: &TrackFigure) {
    let n = figure.tracks.len() as f32;
    let total = ui.available_width();
    let gap = total * figure.horizontal_spacing;
    let width = ((total - gap * (n - 1.0)) / n).max(MIN_TRACK_WIDTH);

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        ui.horizontal_top(|ui: &mut Ui| {
            ui.spacing_mut().item_spacing.x = gap;
            for track in &figure.tracks {
                ui.vertical(|ui: &mut Ui| {
                    ui.set_width(width);
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.strong(track.curve.as_str());
                    });
                    depth_track(ui, track, figure, width);
                });
            }
        });
    });
}

fn depth_track(ui: &mut Ui, track: &Track, figure: &TrackFigure, width: f32) {
    let [deepest, shallowest] = figure.depth_range;
    let (x_min, x_max) = padded(track.value_range().unwrap_or((0.0, 1.0)));

    let curve = track.curve.clone();
    let unit = track.unit.clone();

    let mut plot = Plot::new(("depth_track", &track.curve))
        .width(width)
        .height(figure.height)
        .x_axis_label(track.x_title.as_str())
        .show_axes([true, track.y_title.is_some()])
        .y_axis_formatter(|mark, _range| format_depth(-mark.value))
        .label_formatter(move |_name, point| {
            format!(
                "{curve}: {:.3} {unit}\nDepth: {}",
                point.x,
                format_depth(-point.y)
            )
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    if let Some(title) = &track.y_title {
        plot = plot.y_axis_label(title.as_str());
    }
    if figure.show_legend {
        plot = plot.legend(egui_plot::Legend::default());
    }

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [x_min, -deepest],
            [x_max, -shallowest],
        ));

        for run in track.segments() {
            let points: PlotPoints = run.iter().map(|&[value, depth]| [value, -depth]).collect();
            plot_ui.line(Line::new(points).color(track.color).width(1.5));
        }
    });
}

/// Widen `(lo, hi)` by 5 % per side so the curve does not touch the frame.
fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - span * 0.05, hi + span * 0.05)
}

/// Depth tick label: whole numbers without decimals, otherwise two places.
fn format_depth(depth: f64) -> String {
    let depth = if depth == 0.0 { 0.0 } else { depth };
    if depth.fract() == 0.0 {
        format!("{depth:.0}")
    } else {
        format!("{depth:.2}")
    }
}
