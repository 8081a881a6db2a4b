//! Multi-document processing.
//!
//! Every document is independent: it owns its totals and its failure. An
//! extraction error is recorded on that document and the batch goes on.

use crate::core::extract::TextExtractor;
use crate::core::timesheet::{DayReport, TimesheetResult, reconcile_detailed};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedFile {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TimesheetResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<DayReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessedFile {
    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}

pub fn process_file(path: &Path, extractor: &dyn TextExtractor) -> ProcessedFile {
    let file_name = path.display().to_string();

    match extractor.extract_text(path) {
        Ok(text) => {
            let rec = reconcile_detailed(&text);
            ProcessedFile {
                file_name,
                result: Some(rec.result),
                days: rec.days,
                error: None,
            }
        }
        Err(e) => ProcessedFile {
            file_name,
            result: None,
            days: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}

/// Process all `paths` in parallel. Output order matches input order.
pub fn process_files(paths: &[PathBuf], extractor: &dyn TextExtractor) -> Vec<ProcessedFile> {
    paths
        .par_iter()
        .map(|p| process_file(p, extractor))
        .collect()
}
