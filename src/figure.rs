use eframe::egui::Color32;
use thiserror::Error;

use crate::color::track_colors;
use crate::data::las::ColumnData;
use crate::data::model::LogTable;
use crate::data::selection::DepthBounds;

// ---------------------------------------------------------------------------
// Figure layout constants
// ---------------------------------------------------------------------------

/// Total figure height in points.
pub const FIGURE_HEIGHT: f32 = 800.0;

/// Gap between neighbouring tracks as a fraction of the figure width.
pub const HORIZONTAL_SPACING: f32 = 0.02;

pub const DEPTH_AXIS_TITLE: &str = "Depth";

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("no curves selected")]
    NoCurves,

    #[error("curve '{0}' is not in the loaded log")]
    MissingCurve(String),

    #[error("curve '{curve}' holds non-numeric values (e.g. '{sample}') and cannot be plotted")]
    NonNumeric { curve: String, sample: String },
}

// ---------------------------------------------------------------------------
// TrackFigure – what the central panel draws
// ---------------------------------------------------------------------------

/// One depth track: a single curve plotted against the shared depth axis.
#[derive(Debug, Clone)]
pub struct Track {
    pub curve: String,
    pub unit: String,
    /// Horizontal axis title (the curve name).
    pub x_title: String,
    /// Vertical axis title; only the leftmost track carries one.
    pub y_title: Option<String>,
    pub color: Color32,
    /// `[value, depth]` pairs in row order. NULL samples are `NaN`.
    pub points: Vec<[f64; 2]>,
}

impl Track {
    /// Runs of consecutive plottable points; NULL samples break the line.
    pub fn segments(&self) -> impl Iterator<Item = &[[f64; 2]]> {
        self.points
            .split(|p| !(p[0].is_finite() && p[1].is_finite()))
            .filter(|run| !run.is_empty())
    }

    /// `(min, max)` of the finite curve values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p[0])
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Side-by-side tracks sharing one inverted depth axis.
#[derive(Debug, Clone)]
pub struct TrackFigure {
    pub tracks: Vec<Track>,
    /// Vertical axis range, listed top-of-screen first: `[deepest, shallowest]`.
    pub depth_range: [f64; 2],
    pub height: f32,
    pub horizontal_spacing: f32,
    pub show_legend: bool,
}

fn non_numeric(curve: &str, data: &ColumnData) -> RenderError {
    let sample = match data {
        ColumnData::Text(raw) => raw
            .iter()
            .find(|s| s.parse::<f64>().is_err())
            .cloned()
            .unwrap_or_default(),
        ColumnData::Numeric(_) => String::new(),
    };
    RenderError::NonNumeric {
        curve: curve.to_string(),
        sample,
    }
}

/// Build the figure for `selection` over `bounds`.
///
/// Samples outside `bounds` are kept; the axis range does the clipping.
pub fn build_figure(
    table: &LogTable,
    selection: &[String],
    bounds: DepthBounds,
) -> Result<TrackFigure, RenderError> {
    if selection.is_empty() {
        return Err(RenderError::NoCurves);
    }

    let colors = track_colors(selection);
    let mut tracks = Vec::with_capacity(selection.len());

    for (i, (name, color)) in selection.iter().zip(colors).enumerate() {
        let curve = table
            .curve(name)
            .ok_or_else(|| RenderError::MissingCurve(name.clone()))?;

        let Some(values) = curve.data.as_numeric() else {
            return Err(non_numeric(name, &curve.data));
        };

        tracks.push(Track {
            curve: name.clone(),
            unit: curve.unit.clone(),
            x_title: name.clone(),
            y_title: (i == 0).then(|| DEPTH_AXIS_TITLE.to_string()),
            color,
            points: values
                .iter()
                .zip(&table.depth)
                .map(|(&v, &d)| [v, d])
                .collect(),
        });
    }

    Ok(TrackFigure {
        tracks,
        depth_range: [bounds.max, bounds.min],
        height: FIGURE_HEIGHT,
        horizontal_spacing: HORIZONTAL_SPACING,
        show_legend: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::SAMPLE_LAS;
    use crate::data::loader::ingest;

    fn sel(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn full(table: &LogTable) -> DepthBounds {
        table.depth_extent()
    }

    #[test]
    fn one_track_per_selected_curve_in_order() {
        let table = ingest(SAMPLE_LAS.as_bytes()).unwrap();
        let fig = build_figure(&table, &sel(&["RT", "GR", "NPHI"]), full(&table)).unwrap();

        let curves: Vec<&str> = fig.tracks.iter().map(|t| t.curve.as_str()).collect();
        assert_eq!(curves, ["RT", "GR", "NPHI"]);
        assert!(fig.tracks.iter().all(|t| t.x_title == t.curve));
        assert!(!fig.show_legend);
        assert_eq!(fig.height, FIGURE_HEIGHT);
        assert_eq!(fig.horizontal_spacing, HORIZONTAL_SPACING);
    }

    #[test]
    fn depth_title_only_on_leftmost_track() {
        let table = ingest(SAMPLE_LAS.as_bytes()).unwrap();
        let fig = build_figure(&table, &sel(&["GR", "RHOB", "NPHI"]), full(&table)).unwrap();
        assert_eq!(fig.tracks[0].y_title.as_deref(), Some("Depth"));
        assert!(fig.tracks[1..].iter().all(|t| t.y_title.is_none()));
    }

    #[test]
    fn depth_axis_is_listed_deepest_first() {
        let table = ingest(SAMPLE_LAS.as_bytes()).unwrap();
        let fig = build_figure(&table, &sel(&["GR"]), full(&table)).unwrap();
        assert_eq!(fig.depth_range, [2000.0, 1000.0]);

        let narrow = DepthBounds { min: 1200.0, max: 1500.0 };
        let fig = build_figure(&table, &sel(&["GR"]), narrow).unwrap();
        assert_eq!(fig.depth_range, [1500.0, 1200.0]);
    }

    #[test]
    fn samples_are_not_filtered_by_depth() {
        let table = ingest(SAMPLE_LAS.as_bytes()).unwrap();
        let narrow = DepthBounds { min: 1200.0, max: 1500.0 };
        let fig = build_figure(&table, &sel(&["GR"]), narrow).unwrap();
        assert_eq!(fig.tracks[0].points.len(), table.len());
        assert_eq!(fig.tracks[0].points[0], [45.2, 1000.0]);
    }

    #[test]
    fn single_curve_is_an_ordinary_figure() {
        let table = ingest(SAMPLE_LAS.as_bytes()).unwrap();
        let fig = build_figure(&table, &sel(&["NPHI"]), full(&table)).unwrap();
        assert_eq!(fig.tracks.len(), 1);
        assert_eq!(fig.tracks[0].y_title.as_deref(), Some("Depth"));
    }

    #[test]
    fn null_samples_split_the_line() {
        let table = ingest(SAMPLE_LAS.as_bytes()).unwrap();
        let fig = build_figure(&table, &sel(&["RT"]), full(&table)).unwrap();
        let runs: Vec<usize> = fig.tracks[0].segments().map(|s| s.len()).collect();
        assert_eq!(runs, [2, 2]);
        assert_eq!(fig.tracks[0].value_range(), Some((8.1, 20.3)));
    }

    #[test]
    fn text_curve_is_a_render_error() {
        let table = ingest(b"~C\nDEPT.M :\nLITH. :\n~A\n1 1.5\n2 sand\n").unwrap();
        assert_eq!(
            build_figure(&table, &sel(&["LITH"]), full(&table)).unwrap_err(),
            RenderError::NonNumeric {
                curve: "LITH".to_string(),
                sample: "sand".to_string(),
            }
        );
    }

    #[test]
    fn empty_or_unknown_selection_is_refused() {
        let table = ingest(SAMPLE_LAS.as_bytes()).unwrap();
        assert_eq!(
            build_figure(&table, &[], full(&table)).unwrap_err(),
            RenderError::NoCurves
        );
        assert_eq!(
            build_figure(&table, &sel(&["SP"]), full(&table)).unwrap_err(),
            RenderError::MissingCurve("SP".to_string())
        );
    }
}
