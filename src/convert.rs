//! One conversion run: read the object file, extract rows, write the workbook

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::config::ConversionConfig;
use crate::export::WorkbookExporter;
use crate::metadata::{Extraction, ParserMode, Passes};

/// Row counts of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output: PathBuf,
    pub dependencies: usize,
    pub fields: usize,
    pub labels: Option<usize>,
    pub record_types: Option<usize>,
    pub sheets: Vec<&'static str>,
}

/// Extract and sort rows from object file text
pub fn extract(content: &str, parser: ParserMode, passes: Passes) -> Result<Extraction> {
    info!(
        "Extracting with {} parser (labels: {}, record types: {})",
        parser, passes.labels, passes.record_types
    );

    let mut extraction = parser.extractor().extract(content, passes)?;
    extraction.sort_dependencies();
    Ok(extraction)
}

/// Validate, extract, and write the workbook described by `config`
pub fn run(config: &ConversionConfig) -> Result<ConversionSummary> {
    config.validate()?;

    info!("Reading object file: {}", config.input.display());
    let content = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read input file: {}", config.input.display()))?;

    let extraction = extract(&content, config.parser, config.passes)?;

    if config.open {
        WorkbookExporter::export_and_open(&extraction, &config.output)?;
    } else {
        WorkbookExporter::export_to_excel(&extraction, &config.output)?;
    }

    Ok(ConversionSummary {
        output: config.output.clone(),
        dependencies: extraction.dependencies.len(),
        fields: extraction.fields.len(),
        labels: extraction.labels.as_ref().map(Vec::len),
        record_types: extraction.record_types.as_ref().map(Vec::len),
        sheets: WorkbookExporter::sheet_names(&extraction),
    })
}
