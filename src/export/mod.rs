//! Excel export of extracted object metadata

mod formatting;
mod helpers;
pub mod sheets;

use anyhow::{Context, Result};
use rust_xlsxwriter::*;
use std::path::Path;

use crate::metadata::Extraction;
use helpers::try_open_file;
use sheets::*;

/// Renders an [`Extraction`] as a workbook
pub struct WorkbookExporter;

impl WorkbookExporter {
    /// Export to Excel file and auto-open
    pub fn export_and_open(extraction: &Extraction, file_path: &Path) -> Result<()> {
        Self::export_to_excel(extraction, file_path)?;
        try_open_file(file_path);
        Ok(())
    }

    /// Export to Excel file, replacing any existing file
    pub fn export_to_excel(extraction: &Extraction, file_path: &Path) -> Result<()> {
        let mut workbook = Self::build_workbook(extraction)?;

        workbook
            .save(file_path)
            .with_context(|| format!("Failed to save Excel file: {}", file_path.display()))?;

        log::info!("Excel file exported to: {}", file_path.display());
        Ok(())
    }

    /// Sheets in order: Data, Fields, API-Label, RecordType.
    /// Only Data is unconditional; the others are skipped when they would be empty.
    pub fn build_workbook(extraction: &Extraction) -> Result<Workbook> {
        let mut workbook = Workbook::new();

        create_data_sheet(&mut workbook, &extraction.dependencies)?;

        if !extraction.fields.is_empty() {
            create_fields_sheet(&mut workbook, &extraction.fields)?;
        }

        if let Some(labels) = extraction.labels.as_deref().filter(|rows| !rows.is_empty()) {
            create_api_label_sheet(&mut workbook, labels)?;
        }

        if let Some(record_types) = extraction.record_types.as_deref().filter(|rows| !rows.is_empty()) {
            create_record_type_sheet(&mut workbook, record_types)?;
        }

        Ok(workbook)
    }

    /// Names of the sheets [`Self::build_workbook`] creates for this extraction
    pub fn sheet_names(extraction: &Extraction) -> Vec<&'static str> {
        let mut names = vec![DATA_SHEET];
        if !extraction.fields.is_empty() {
            names.push(FIELDS_SHEET);
        }
        if extraction.label_count() > 0 {
            names.push(API_LABEL_SHEET);
        }
        if extraction.record_type_count() > 0 {
            names.push(RECORD_TYPE_SHEET);
        }
        names
    }
}
