//! Document ingest - sequential file reading and extraction
//!
//! Files are processed one at a time, each fully read, decoded, and extracted
//! before the next begins. A failing file is recorded and skipped; it never
//! aborts the batch and contributes no product record.

use std::path::{Path, PathBuf};

use crate::error::{Result, SpecwiseError};
use crate::extract;
use crate::session::{ComparisonSession, ProductRecord};

/// Filename brands checked when document text yields no brand
static FILENAME_BRANDS: &[&str] = &[
    "tke",
    "otis",
    "schindler",
    "kone",
    "mitsubishi",
    "samsung",
    "apple",
    "lg",
    "sony",
];

/// Outcome of one ingest batch
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Records successfully added to the session
    pub loaded: usize,
    pub failures: Vec<IngestFailure>,
}

#[derive(Debug)]
pub struct IngestFailure {
    pub source_name: String,
    pub error: SpecwiseError,
}

impl IngestFailure {
    /// Failure cause without repeating the source name
    pub fn reason(&self) -> String {
        match &self.error {
            SpecwiseError::DocumentDecode { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Read, decode, and extract each path into the session, sequentially
pub fn ingest_paths(session: &mut ComparisonSession, paths: &[PathBuf]) -> IngestReport {
    let mut report = IngestReport::default();

    for path in paths {
        let source_name = display_name(path);
        match load_document(path, &source_name) {
            Ok(text) => {
                let extracted =
                    extract::extract(&text, &session.catalog, &session.product_type);
                let mut record = ProductRecord::from_extraction(extracted, &source_name);
                if record.brand == extract::UNKNOWN_BRAND {
                    if let Some(brand) = brand_from_filename(&source_name) {
                        record.brand = brand;
                    }
                }
                session.records.push(record);
                report.loaded += 1;
            }
            Err(error) => report.failures.push(IngestFailure { source_name, error }),
        }
    }

    report
}

/// Read a file and decode it as UTF-8 text
fn load_document(path: &Path, source_name: &str) -> Result<String> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| SpecwiseError::DocumentDecode {
        source_name: source_name.to_string(),
        reason: format!("not valid UTF-8 text: {}", e),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Scan the file name for a known brand, upper-cased on hit
fn brand_from_filename(name: &str) -> Option<String> {
    let lowered = name.to_lowercase();
    FILENAME_BRANDS
        .iter()
        .find(|brand| lowered.contains(*brand))
        .map(|brand| brand.to_uppercase())
}
