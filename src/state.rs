use std::path::Path;

use crate::data::loader::{self, IngestError};
use crate::data::model::LogTable;
use crate::data::selection::{self, CurveSelection, DepthBounds, SelectionError};
use crate::figure::{build_figure, TrackFigure};

// ---------------------------------------------------------------------------
// Loaded log: table + the user's view of it
// ---------------------------------------------------------------------------

/// A successfully ingested file and the selection made on it.
pub struct LoadedLog {
    /// File name as uploaded.
    pub name: String,
    pub table: LogTable,
    pub selection: CurveSelection,
    pub bounds: DepthBounds,
}

impl LoadedLog {
    fn new(name: String, table: LogTable) -> Self {
        let selection = CurveSelection::default_for(&table);
        let bounds = table.depth_extent();
        Self {
            name,
            table,
            selection,
            bounds,
        }
    }

    /// Depth steps whose depth lies inside the current bounds.
    pub fn samples_in_window(&self) -> usize {
        self.table
            .depth
            .iter()
            .filter(|&&d| self.bounds.contains(d))
            .count()
    }
}

// ---------------------------------------------------------------------------
// What the central panel shows
// ---------------------------------------------------------------------------

pub enum MainView {
    /// No file yet.
    AwaitingUpload,
    /// The last upload could not be ingested.
    UploadFailed(String),
    /// A log is loaded but no curve is selected.
    SelectCurve,
    Tracks(TrackFigure),
    RenderFailed(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded log (None until a file is ingested, and after a failed upload).
    pub log: Option<LoadedLog>,

    /// Error from the last upload attempt.
    pub status_message: Option<String>,
}

impl AppState {
    /// Replace the session with a freshly loaded table, resetting selection
    /// and depth bounds to their defaults.
    pub fn set_table(&mut self, name: String, table: LogTable) {
        log::info!(
            "Loaded {name}: {} depth steps, curves {:?}",
            table.len(),
            table.curve_names()
        );
        self.log = Some(LoadedLog::new(name, table));
        self.status_message = None;
    }

    /// Drop any loaded table and report why.
    fn fail(&mut self, message: String) {
        log::error!("Failed to load file: {message}");
        self.log = None;
        self.status_message = Some(message);
    }

    /// Ingest an uploaded blob (drag-and-drop).
    pub fn ingest_upload(&mut self, name: &str, bytes: &[u8]) {
        match loader::ingest_upload(name, bytes) {
            Ok(table) => self.set_table(name.to_string(), table),
            Err(e @ IngestError::UnsupportedExtension(_)) => {
                log::warn!("Rejected upload {name}");
                self.fail(format!("Error: {e}"));
            }
            Err(e) => self.fail(format!("Error: {name}: {e}")),
        }
    }

    /// Load a file picked from disk.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(table) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.set_table(name, table);
            }
            Err(e) => self.fail(format!("Error: {e:#}")),
        }
    }

    /// Select or deselect one curve.
    pub fn toggle_curve(&mut self, name: &str) {
        if let Some(session) = &mut self.log {
            if let Err(e) = session.selection.toggle(name, &session.table) {
                log::warn!("{e}");
            }
        }
    }

    /// Replace the curve selection outright.
    pub fn set_curves(&mut self, names: &[String]) -> Result<(), SelectionError> {
        match &mut self.log {
            Some(session) => session.selection.set(names, &session.table),
            None => Ok(()),
        }
    }

    pub fn select_all_curves(&mut self) {
        if let Some(session) = &mut self.log {
            session.selection.select_all(&session.table);
        }
    }

    pub fn select_no_curves(&mut self) {
        if let Some(session) = &mut self.log {
            session.selection.clear();
        }
    }

    /// Set both depth bounds; values outside the log are clamped.
    pub fn set_depth_bounds(&mut self, min: f64, max: f64) -> Result<(), SelectionError> {
        if let Some(session) = &mut self.log {
            session.bounds = selection::clamped_bounds(min, max, session.table.depth_extent())?;
        }
        Ok(())
    }

    pub fn set_depth_min(&mut self, min: f64) {
        if let Some(session) = &mut self.log {
            session.bounds = selection::with_min(session.bounds, min, session.table.depth_extent());
        }
    }

    pub fn set_depth_max(&mut self, max: f64) {
        if let Some(session) = &mut self.log {
            session.bounds = selection::with_max(session.bounds, max, session.table.depth_extent());
        }
    }

    pub fn reset_depth_bounds(&mut self) {
        let Some(extent) = self.log.as_ref().map(|s| s.table.depth_extent()) else {
            return;
        };
        if let Err(e) = self.set_depth_bounds(extent.min, extent.max) {
            log::warn!("{e}");
        }
    }

    /// Decide what the central panel shows. The renderer only runs when at
    /// least one curve is selected.
    pub fn view(&self) -> MainView {
        let Some(session) = &self.log else {
            return match &self.status_message {
                Some(msg) => MainView::UploadFailed(msg.clone()),
                None => MainView::AwaitingUpload,
            };
        };
        if session.selection.is_empty() {
            return MainView::SelectCurve;
        }
        match build_figure(&session.table, session.selection.names(), session.bounds) {
            Ok(figure) => MainView::Tracks(figure),
            Err(e) => MainView::RenderFailed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::SAMPLE_LAS;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.ingest_upload("demo.las", SAMPLE_LAS.as_bytes());
        state
    }

    fn figure(state: &AppState) -> TrackFigure {
        match state.view() {
            MainView::Tracks(fig) => fig,
            _ => panic!("expected a track figure"),
        }
    }

    fn track_names(fig: &TrackFigure) -> Vec<&str> {
        fig.tracks.iter().map(|t| t.curve.as_str()).collect()
    }

    #[test]
    fn starts_awaiting_upload() {
        assert!(matches!(AppState::default().view(), MainView::AwaitingUpload));
    }

    #[test]
    fn load_shows_default_three_tracks_over_full_depth() {
        let state = loaded();
        let log = state.log.as_ref().unwrap();
        assert_eq!(log.name, "demo.las");
        assert_eq!(log.bounds, DepthBounds { min: 1000.0, max: 2000.0 });

        let fig = figure(&state);
        assert_eq!(track_names(&fig), ["GR", "RHOB", "NPHI"]);
        assert_eq!(fig.depth_range, [2000.0, 1000.0]);
    }

    #[test]
    fn narrowing_depth_only_changes_axis_range() {
        let mut state = loaded();
        let before = figure(&state);

        state.set_depth_bounds(1200.0, 1500.0).unwrap();
        let after = figure(&state);

        assert_eq!(after.depth_range, [1500.0, 1200.0]);
        assert_eq!(track_names(&after), track_names(&before));
        for (a, b) in after.tracks.iter().zip(&before.tracks) {
            assert_eq!(a.points.len(), b.points.len());
            assert_eq!(a.x_title, b.x_title);
        }
        assert_eq!(state.log.as_ref().unwrap().samples_in_window(), 2);
    }

    #[test]
    fn inverted_bounds_are_rejected_and_out_of_range_clamped() {
        let mut state = loaded();
        assert!(state.set_depth_bounds(1500.0, 1200.0).is_err());
        state.set_depth_bounds(0.0, 5000.0).unwrap();
        assert_eq!(figure(&state).depth_range, [2000.0, 1000.0]);

        state.set_depth_min(1750.0);
        state.set_depth_max(1100.0);
        assert_eq!(figure(&state).depth_range, [1750.0, 1750.0]);
        state.reset_depth_bounds();
        assert_eq!(figure(&state).depth_range, [2000.0, 1000.0]);
    }

    #[test]
    fn empty_selection_shows_notice_instead_of_figure() {
        let mut state = loaded();
        state.select_no_curves();
        assert!(matches!(state.view(), MainView::SelectCurve));

        state.toggle_curve("RT");
        assert_eq!(track_names(&figure(&state)), ["RT"]);
    }

    #[test]
    fn selection_size_matches_track_count() {
        let mut state = loaded();
        state.select_all_curves();
        assert_eq!(figure(&state).tracks.len(), 4);

        let pick = vec!["NPHI".to_string(), "GR".to_string()];
        state.set_curves(&pick).unwrap();
        assert_eq!(track_names(&figure(&state)), ["NPHI", "GR"]);
        assert!(state.set_curves(&["DEPT".to_string()]).is_err());
    }

    #[test]
    fn invalid_upload_leaves_no_table() {
        let mut state = loaded();
        state.ingest_upload("broken.las", &[0xff, 0x00, 0xfe]);
        assert!(state.log.is_none());
        match state.view() {
            MainView::UploadFailed(msg) => assert!(msg.contains("UTF-8")),
            _ => panic!("expected an upload error"),
        }

        state.ingest_upload("notes.las", b"free text, not a log\n");
        match state.view() {
            MainView::UploadFailed(msg) => assert!(msg.contains("LAS")),
            _ => panic!("expected an upload error"),
        }
    }

    #[test]
    fn new_upload_resets_selection_and_bounds() {
        let mut state = loaded();
        state.select_no_curves();
        state.set_depth_bounds(1200.0, 1500.0).unwrap();

        state.ingest_upload("again.las", SAMPLE_LAS.as_bytes());
        let log = state.log.as_ref().unwrap();
        assert_eq!(log.selection.names().len(), 3);
        assert_eq!(log.bounds, DepthBounds { min: 1000.0, max: 2000.0 });
        assert!(state.status_message.is_none());
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let mut state = AppState::default();
        state.ingest_upload("demo.txt", SAMPLE_LAS.as_bytes());
        assert!(matches!(state.view(), MainView::UploadFailed(_)));
    }

    #[test]
    fn text_curve_reports_render_error() {
        let mut state = AppState::default();
        state.ingest_upload("lith.las", b"~C\nDEPT.M :\nLITH. :\n~A\n1 sand\n");
        match state.view() {
            MainView::RenderFailed(msg) => assert!(msg.contains("LITH")),
            _ => panic!("expected a render error"),
        }
    }
}
