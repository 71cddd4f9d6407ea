use std::collections::{HashMap, HashSet};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while reading a LAS document.
#[derive(Debug, Error, PartialEq)]
pub enum LasError {
    #[error("line {line}: content before the first '~' section")]
    ContentBeforeSection { line: usize },

    #[error("line {line}: malformed header line '{text}' (expected MNEM.UNIT VALUE : DESCRIPTION)")]
    MalformedHeader { line: usize, text: String },

    #[error("LAS version {0} is not supported (only 1.2 and 2.0)")]
    UnsupportedVersion(String),

    #[error("missing {0} section")]
    MissingSection(&'static str),

    #[error("~CURVE section defines no curves")]
    NoCurves,

    #[error("~ASCII section contains no data")]
    EmptyData,

    #[error("line {line}: expected {expected} values, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("wrapped data holds {values} values, not a multiple of {columns} curves")]
    WrappedRemainder { values: usize, columns: usize },

    #[error("depth column '{0}' contains non-numeric values")]
    NonNumericDepth(String),

    #[error("depth column '{0}' has no valid (non-null) samples")]
    NoDepthValues(String),
}

// ---------------------------------------------------------------------------
// Header items
// ---------------------------------------------------------------------------

/// One `MNEM.UNIT  VALUE : DESCRIPTION` line of a header section.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderItem {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
}

impl HeaderItem {
    fn parse(line: &str, line_no: usize) -> Result<Self, LasError> {
        let (mnemonic, rest) = line.split_once('.').ok_or_else(|| LasError::MalformedHeader {
            line: line_no,
            text: line.to_string(),
        })?;

        // The unit is glued to the dot and ends at the first blank (or colon).
        let unit_end = rest
            .find(|c: char| c.is_whitespace() || c == ':')
            .unwrap_or(rest.len());
        let (unit, rest) = rest.split_at(unit_end);

        let (value, description) = match rest.rfind(':') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };

        Ok(HeaderItem {
            mnemonic: mnemonic.trim().to_string(),
            unit: unit.trim().to_string(),
            value: value.trim().to_string(),
            description: description.trim().to_string(),
        })
    }
}

/// Find an item by mnemonic (case-insensitive).
pub fn find_item<'a>(items: &'a [HeaderItem], mnemonic: &str) -> Option<&'a HeaderItem> {
    items
        .iter()
        .find(|item| item.mnemonic.eq_ignore_ascii_case(mnemonic))
}

// ---------------------------------------------------------------------------
// Column data
// ---------------------------------------------------------------------------

/// Samples of a single `~A` column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Every value parsed as a number; NULL samples are `NaN`.
    Numeric(Vec<f64>),
    /// At least one value is not a number; kept verbatim.
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }

    fn from_tokens(tokens: Vec<&str>, null: Option<f64>) -> Self {
        let parsed: Option<Vec<f64>> = tokens
            .iter()
            .map(|tok| tok.parse::<f64>().ok())
            .collect();

        match parsed {
            Some(values) => ColumnData::Numeric(
                values
                    .into_iter()
                    .map(|v| if Some(v) == null { f64::NAN } else { v })
                    .collect(),
            ),
            None => ColumnData::Text(tokens.into_iter().map(str::to_string).collect()),
        }
    }
}

// ---------------------------------------------------------------------------
// LasFile – the parsed document
// ---------------------------------------------------------------------------

/// A parsed LAS 1.2 / 2.0 document.
#[derive(Debug, Clone)]
pub struct LasFile {
    pub version: Vec<HeaderItem>,
    pub well: Vec<HeaderItem>,
    /// One entry per data column; mnemonics are unique.
    pub curves: Vec<HeaderItem>,
    pub parameters: Vec<HeaderItem>,
    /// Free text of the `~O` section.
    pub other: String,
    /// Column-major data, aligned with `curves`.
    pub data: Vec<ColumnData>,
}

impl LasFile {
    /// Number of depth steps.
    pub fn row_count(&self) -> usize {
        self.data.first().map(ColumnData::len).unwrap_or(0)
    }

    /// The `NULL` sentinel declared in the well section, if any.
    pub fn null_value(&self) -> Option<f64> {
        null_value(&self.well)
    }
}

fn null_value(well: &[HeaderItem]) -> Option<f64> {
    find_item(well, "NULL").and_then(|item| item.value.parse().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Version,
    Well,
    Curve,
    Parameter,
    Other,
    Ascii,
    Unknown,
}

impl Section {
    fn from_marker(marker: &str) -> Self {
        match marker.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('V') => Section::Version,
            Some('W') => Section::Well,
            Some('C') => Section::Curve,
            Some('P') => Section::Parameter,
            Some('O') => Section::Other,
            Some('A') => Section::Ascii,
            _ => Section::Unknown,
        }
    }
}

/// Parse the text of a LAS document.
pub fn parse(text: &str) -> Result<LasFile, LasError> {
    let mut section = Section::None;
    let mut version = Vec::new();
    let mut well = Vec::new();
    let mut curves = Vec::new();
    let mut parameters = Vec::new();
    let mut other = String::new();
    let mut rows: Vec<(usize, &str)> = Vec::new();
    let mut seen_curves = false;
    let mut seen_ascii = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(marker) = line.strip_prefix('~') {
            section = Section::from_marker(marker);
            seen_curves |= section == Section::Curve;
            seen_ascii |= section == Section::Ascii;
            continue;
        }

        match section {
            Section::None => return Err(LasError::ContentBeforeSection { line: line_no }),
            Section::Version => version.push(HeaderItem::parse(line, line_no)?),
            Section::Well => well.push(HeaderItem::parse(line, line_no)?),
            Section::Curve => curves.push(HeaderItem::parse(line, line_no)?),
            Section::Parameter => parameters.push(HeaderItem::parse(line, line_no)?),
            Section::Other => {
                other.push_str(line);
                other.push('\n');
            }
            Section::Ascii => rows.push((line_no, line)),
            Section::Unknown => {}
        }
    }

    if let Some(vers) = find_item(&version, "VERS") {
        if vers.value.parse::<f64>().is_ok_and(|v| v >= 3.0) {
            return Err(LasError::UnsupportedVersion(vers.value.clone()));
        }
    }
    if !seen_curves {
        return Err(LasError::MissingSection("~CURVE"));
    }
    if curves.is_empty() {
        return Err(LasError::NoCurves);
    }
    if !seen_ascii {
        return Err(LasError::MissingSection("~ASCII"));
    }

    dedupe_mnemonics(&mut curves);

    let wrapped = find_item(&version, "WRAP").is_some_and(|w| w.value.eq_ignore_ascii_case("YES"));
    let data = read_columns(&rows, curves.len(), wrapped, null_value(&well))?;

    Ok(LasFile {
        version,
        well,
        curves,
        parameters,
        other,
        data,
    })
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
}

/// Split the `~A` lines into column-major token lists and convert them.
fn read_columns(
    rows: &[(usize, &str)],
    width: usize,
    wrapped: bool,
    null: Option<f64>,
) -> Result<Vec<ColumnData>, LasError> {
    let mut columns: Vec<Vec<&str>> = vec![Vec::new(); width];

    if wrapped {
        let values: Vec<&str> = rows.iter().flat_map(|(_, line)| tokens(line)).collect();
        if values.len() % width != 0 {
            return Err(LasError::WrappedRemainder {
                values: values.len(),
                columns: width,
            });
        }
        for step in values.chunks(width) {
            for (column, &tok) in columns.iter_mut().zip(step) {
                column.push(tok);
            }
        }
    } else {
        for &(line_no, line) in rows {
            let step: Vec<&str> = tokens(line).collect();
            if step.len() != width {
                return Err(LasError::RowWidth {
                    line: line_no,
                    expected: width,
                    found: step.len(),
                });
            }
            for (column, tok) in columns.iter_mut().zip(step) {
                column.push(tok);
            }
        }
    }

    if columns[0].is_empty() {
        return Err(LasError::EmptyData);
    }

    Ok(columns
        .into_iter()
        .map(|toks| ColumnData::from_tokens(toks, null))
        .collect())
}

/// Give repeated mnemonics a `:n` suffix so every column name is unique.
///
/// A suffix that would clash with a name already in the file is skipped.
fn dedupe_mnemonics(curves: &mut [HeaderItem]) {
    for curve in curves.iter_mut().filter(|c| c.mnemonic.is_empty()) {
        curve.mnemonic = "UNKNOWN".to_string();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for curve in curves.iter() {
        *counts.entry(curve.mnemonic.clone()).or_insert(0) += 1;
    }

    let mut taken: HashSet<String> = counts
        .iter()
        .filter(|&(_, &count)| count == 1)
        .map(|(name, _)| name.clone())
        .collect();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();

    for curve in curves.iter_mut() {
        if counts[&curve.mnemonic] < 2 {
            continue;
        }
        let n = next_suffix.entry(curve.mnemonic.clone()).or_insert(0);
        let renamed = loop {
            *n += 1;
            let candidate = format!("{}:{n}", curve.mnemonic);
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
        taken.insert(renamed.clone());
        curve.mnemonic = renamed;
    }
}
