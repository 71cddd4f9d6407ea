use super::las::{find_item, ColumnData, HeaderItem, LasError, LasFile};
use super::selection::DepthBounds;

// ---------------------------------------------------------------------------
// Curve – one selectable column of the log
// ---------------------------------------------------------------------------

/// A named log curve, sampled at every depth step of its table.
#[derive(Debug, Clone)]
pub struct Curve {
    pub name: String,
    pub unit: String,
    pub description: String,
    pub data: ColumnData,
}

// ---------------------------------------------------------------------------
// LogTable – the complete loaded log
// ---------------------------------------------------------------------------

/// Depth index plus the curves recorded along it.
///
/// The first `~A` column is always the depth index; it is never offered as a
/// curve. Every curve has exactly `depth.len()` samples.
#[derive(Debug, Clone)]
pub struct LogTable {
    pub depth_name: String,
    pub depth_unit: String,
    pub depth: Vec<f64>,
    /// Curves in file order.
    pub curves: Vec<Curve>,
    /// `~V` section, kept for display.
    pub version: Vec<HeaderItem>,
    /// `~W` section, kept for display.
    pub well: Vec<HeaderItem>,
    /// `~P` section, kept for display.
    pub parameters: Vec<HeaderItem>,
    pub other: String,
    pub null_value: Option<f64>,
    extent: DepthBounds,
}

impl LogTable {
    /// Split a parsed document into depth index and curves.
    pub fn from_las(las: LasFile) -> Result<Self, LasError> {
        let null_value = las.null_value();
        let LasFile {
            version,
            well,
            curves: infos,
            parameters,
            other,
            data,
        } = las;

        let mut columns = infos.into_iter().zip(data);
        let (depth_info, depth_data) = columns.next().ok_or(LasError::NoCurves)?;

        let depth = match depth_data {
            ColumnData::Numeric(values) => values,
            ColumnData::Text(_) => return Err(LasError::NonNumericDepth(depth_info.mnemonic)),
        };
        let extent = DepthBounds::extent_of(&depth)
            .ok_or_else(|| LasError::NoDepthValues(depth_info.mnemonic.clone()))?;

        let curves = columns
            .map(|(info, data)| Curve {
                name: info.mnemonic,
                unit: info.unit,
                description: info.description,
                data,
            })
            .collect();

        Ok(LogTable {
            depth_name: depth_info.mnemonic,
            depth_unit: depth_info.unit,
            depth,
            curves,
            version,
            well,
            parameters,
            other,
            null_value,
            extent,
        })
    }

    /// Curve names in file order (depth excluded).
    pub fn curve_names(&self) -> Vec<String> {
        self.curves.iter().map(|c| c.name.clone()).collect()
    }

    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.name == name)
    }

    pub fn has_curve(&self, name: &str) -> bool {
        self.curve(name).is_some()
    }

    /// Full `(min, max)` of the depth column, ignoring NULL samples.
    pub fn depth_extent(&self) -> DepthBounds {
        self.extent
    }

    /// Number of depth steps.
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    /// A well-section value such as `WELL` or `COMP`, if present and non-empty.
    pub fn well_value(&self, mnemonic: &str) -> Option<&str> {
        find_item(&self.well, mnemonic)
            .map(|item| item.value.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Declared LAS version (`VERS`), if any.
    pub fn las_version(&self) -> Option<&str> {
        find_item(&self.version, "VERS").map(|item| item.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{SAMPLE_LAS, TWO_CURVE_LAS};
    use crate::data::las::parse;

    fn table(text: &str) -> Result<LogTable, LasError> {
        LogTable::from_las(parse(text)?)
    }

    #[test]
    fn first_column_is_depth_and_rest_are_curves() {
        let t = table(SAMPLE_LAS).unwrap();
        assert_eq!(t.depth_name, "DEPT");
        assert_eq!(t.depth_unit, "M");
        assert_eq!(t.curve_names(), ["GR", "RHOB", "NPHI", "RT"]);
        assert_eq!(t.len(), 5);
        assert!(t.curves.iter().all(|c| c.data.len() == t.len()));
        assert!(!t.has_curve("DEPT"));
    }

    #[test]
    fn depth_extent_is_exact_min_max() {
        let t = table(SAMPLE_LAS).unwrap();
        assert_eq!(t.depth_extent(), DepthBounds { min: 1000.0, max: 2000.0 });

        let t = table(TWO_CURVE_LAS).unwrap();
        assert_eq!(t.depth_extent(), DepthBounds { min: 500.0, max: 501.0 });
    }

    #[test]
    fn header_metadata_is_kept() {
        let t = table(SAMPLE_LAS).unwrap();
        assert_eq!(t.well_value("WELL"), Some("DEMO-1"));
        assert_eq!(t.well_value("comp"), Some("DEMO OPERATING CO."));
        assert_eq!(t.well_value("FLD"), None);
        assert_eq!(t.las_version(), Some("2.0"));
        assert_eq!(t.null_value, Some(-999.25));
        assert_eq!(t.parameters[0].mnemonic, "BHT");
        assert_eq!(t.curve("GR").unwrap().unit, "GAPI");
    }

    #[test]
    fn text_depth_is_rejected() {
        let err = table("~C\nDEPT.M :\nGR. :\n~A\nx 1\n").unwrap_err();
        assert_eq!(err, LasError::NonNumericDepth("DEPT".to_string()));
    }

    #[test]
    fn all_null_depth_is_rejected() {
        let text = "~W\nNULL. -999.25 :\n~C\nDEPT.M :\nGR. :\n~A\n-999.25 1\n";
        assert_eq!(
            table(text).unwrap_err(),
            LasError::NoDepthValues("DEPT".to_string())
        );
    }
}
