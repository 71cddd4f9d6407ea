use std::path::Path;
use std::str::Utf8Error;

use anyhow::{Context, Result};
use thiserror::Error;

use super::las::{self, LasError};
use super::model::LogTable;

/// File extensions accepted by the upload controls.
pub const LAS_EXTENSIONS: &[&str] = &["las"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file type '{0}' (expected a .las file)")]
    UnsupportedExtension(String),

    #[error("file is not valid UTF-8 text: {0}")]
    Decode(#[from] Utf8Error),

    #[error("not a well-formed LAS document: {0}")]
    Parse(#[from] LasError),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Decode and parse an uploaded LAS blob.
pub fn ingest(bytes: &[u8]) -> Result<LogTable, IngestError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let las = las::parse(text)?;
    log::debug!(
        "parsed LAS document: {} curves x {} rows",
        las.curves.len(),
        las.row_count()
    );
    Ok(LogTable::from_las(las)?)
}

/// [`ingest`] an upload named `name`, rejecting anything that is not `.las`.
pub fn ingest_upload(name: &str, bytes: &[u8]) -> Result<LogTable, IngestError> {
    if !has_las_extension(name) {
        return Err(IngestError::UnsupportedExtension(name.to_string()));
    }
    ingest(bytes)
}

/// Read a `.las` file from disk and ingest it.
pub fn load_file(path: &Path) -> Result<LogTable> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    ingest_upload(&name, &bytes).with_context(|| format!("loading {name}"))
}

fn has_las_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            LAS_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::SAMPLE_LAS;

    #[test]
    fn ingests_valid_bytes() {
        let table = ingest(SAMPLE_LAS.as_bytes()).unwrap();
        assert_eq!(table.curve_names(), ["GR", "RHOB", "NPHI", "RT"]);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn leading_bom_is_ignored() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(SAMPLE_LAS.as_bytes());
        assert!(ingest(&bytes).is_ok());
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let bytes = [b'~', b'V', b'\n', 0xff, 0xfe, b'\n'];
        assert!(matches!(ingest(&bytes), Err(IngestError::Decode(_))));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = ingest(b"just some notes\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::Parse(LasError::ContentBeforeSection { line: 1 })
        ));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn upload_requires_las_extension() {
        assert!(ingest_upload("well.LAS", SAMPLE_LAS.as_bytes()).is_ok());
        assert!(matches!(
            ingest_upload("well.csv", SAMPLE_LAS.as_bytes()),
            Err(IngestError::UnsupportedExtension(_))
        ));
        assert!(matches!(
            ingest_upload("las", SAMPLE_LAS.as_bytes()),
            Err(IngestError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn load_file_reports_missing_path() {
        let err = load_file(Path::new("/definitely/not/here.las")).unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
    }
}
