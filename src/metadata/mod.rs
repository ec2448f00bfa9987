//! Row model and extraction passes for Salesforce object metadata
//!
//! Two extractors share the same row model:
//! - [`PatternExtractor`] scans the raw text with regular expressions, block by block
//! - [`StructuredExtractor`] parses the document and walks explicitly scoped elements

mod pattern;
mod structured;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use pattern::{
    PatternExtractor, extract_dependencies, extract_fields, extract_labels, extract_record_types,
};
pub use structured::StructuredExtractor;

/// One controlling value paired with the dependent value it enables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRow {
    pub controlling_field_value: String,
    pub value_name: String,
}

/// A permitted picklist value with its API name and display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub field_full_name: String,
    pub value_full_name: String,
    pub label: String,
}

/// A picklist value made available by a record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTypeRow {
    pub record_type: String,
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub full_name: String,
    pub label: String,
    pub field_type: String,
}

/// Which optional passes run on top of the mandatory dependency and field passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passes {
    pub labels: bool,
    pub record_types: bool,
}

/// Everything extracted from one object file
///
/// `labels` and `record_types` are `None` when their pass was disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub dependencies: Vec<DependencyRow>,
    pub fields: Vec<FieldRow>,
    pub labels: Option<Vec<LabelRow>>,
    pub record_types: Option<Vec<RecordTypeRow>>,
}

impl Extraction {
    /// Stable sort of dependency rows by controlling value; equal values keep document order
    pub fn sort_dependencies(&mut self) {
        self.dependencies
            .sort_by(|a, b| a.controlling_field_value.cmp(&b.controlling_field_value));
    }

    pub fn label_count(&self) -> usize {
        self.labels.as_ref().map_or(0, Vec::len)
    }

    pub fn record_type_count(&self) -> usize {
        self.record_types.as_ref().map_or(0, Vec::len)
    }
}

/// How the object file is read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParserMode {
    /// Regex block matching over the raw text
    #[default]
    Pattern,
    /// XML parsing with explicit element scoping
    Structured,
}

impl ParserMode {
    pub fn extractor(self) -> Box<dyn Extractor> {
        match self {
            ParserMode::Pattern => Box::new(PatternExtractor),
            ParserMode::Structured => Box::new(StructuredExtractor),
        }
    }
}

impl std::fmt::Display for ParserMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserMode::Pattern => write!(f, "pattern"),
            ParserMode::Structured => write!(f, "structured"),
        }
    }
}

/// A strategy for turning object file text into rows
pub trait Extractor {
    /// Run the mandatory passes plus whichever optional passes are enabled.
    /// Dependency rows are returned in document order, unsorted.
    fn extract(&self, content: &str, passes: Passes) -> Result<Extraction>;
}
