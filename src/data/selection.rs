use thiserror::Error;

use super::model::LogTable;

/// How many curves are selected when a log is first loaded.
pub const DEFAULT_CURVE_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("curve '{0}' is not in the loaded log")]
    UnknownCurve(String),

    #[error("depth range is inverted: top {min} is below bottom {max}")]
    InvertedRange { min: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// DepthBounds – visible depth window
// ---------------------------------------------------------------------------

/// A closed depth window, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBounds {
    pub min: f64,
    pub max: f64,
}

impl DepthBounds {
    /// Smallest and largest finite value in `depth`.
    pub fn extent_of(depth: &[f64]) -> Option<Self> {
        depth
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(None, |acc, d| match acc {
                None => Some(DepthBounds { min: d, max: d }),
                Some(b) => Some(DepthBounds {
                    min: b.min.min(d),
                    max: b.max.max(d),
                }),
            })
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, depth: f64) -> bool {
        (self.min..=self.max).contains(&depth)
    }
}

// ---------------------------------------------------------------------------
// CurveSelection – ordered subset of the table's curves
// ---------------------------------------------------------------------------

/// Selected curve names, in the order the tracks are drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSelection {
    curves: Vec<String>,
}

impl CurveSelection {
    /// The first [`DEFAULT_CURVE_COUNT`] curves in file order.
    pub fn default_for(table: &LogTable) -> Self {
        CurveSelection {
            curves: table
                .curves
                .iter()
                .take(DEFAULT_CURVE_COUNT)
                .map(|c| c.name.clone())
                .collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.curves
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.curves.iter().any(|c| c == name)
    }

    /// Replace the selection. Every name must exist in `table`; repeats are dropped.
    pub fn set(&mut self, names: &[String], table: &LogTable) -> Result<(), SelectionError> {
        if let Some(unknown) = names.iter().find(|n| !table.has_curve(n)) {
            return Err(SelectionError::UnknownCurve(unknown.clone()));
        }
        let mut curves: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !curves.contains(name) {
                curves.push(name.clone());
            }
        }
        self.curves = curves;
        Ok(())
    }

    /// Select or deselect one curve. Newly selected curves go to the end.
    pub fn toggle(&mut self, name: &str, table: &LogTable) -> Result<(), SelectionError> {
        if !table.has_curve(name) {
            return Err(SelectionError::UnknownCurve(name.to_string()));
        }
        if let Some(pos) = self.curves.iter().position(|c| c == name) {
            self.curves.remove(pos);
        } else {
            self.curves.push(name.to_string());
        }
        Ok(())
    }

    pub fn select_all(&mut self, table: &LogTable) {
        for name in table.curve_names() {
            if !self.contains(&name) {
                self.curves.push(name);
            }
        }
    }

    pub fn clear(&mut self) {
        self.curves.clear();
    }
}

// ---------------------------------------------------------------------------
// Depth window mutators, always clamped to the table extent
// ---------------------------------------------------------------------------

/// Clamp `(min, max)` into `extent`. Fails when `min > max`.
pub fn clamped_bounds(
    min: f64,
    max: f64,
    extent: DepthBounds,
) -> Result<DepthBounds, SelectionError> {
    if min > max || min.is_nan() || max.is_nan() {
        return Err(SelectionError::InvertedRange { min, max });
    }
    Ok(DepthBounds {
        min: extent.clamp(min),
        max: extent.clamp(max),
    })
}

/// Move the top of the window, never past the bottom.
pub fn with_min(bounds: DepthBounds, min: f64, extent: DepthBounds) -> DepthBounds {
    DepthBounds {
        min: extent.clamp(min).min(bounds.max),
        max: bounds.max,
    }
}

/// Move the bottom of the window, never above the top.
pub fn with_max(bounds: DepthBounds, max: f64, extent: DepthBounds) -> DepthBounds {
    DepthBounds {
        min: bounds.min,
        max: extent.clamp(max).max(bounds.min),
    }
}
