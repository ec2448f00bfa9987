use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::metadata::{ParserMode, Passes};

pub const INPUT_EXTENSION: &str = "object";
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Everything one conversion run needs, independent of how it was collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub passes: Passes,
    pub parser: ParserMode,
    /// Open the workbook with the desktop's spreadsheet application after writing
    pub open: bool,
}

/// Optional defaults read from a user-supplied TOML file
///
/// ```toml
/// labels = true
/// record_types = false
/// parser = "structured"
/// open = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub labels: Option<bool>,
    #[serde(default)]
    pub record_types: Option<bool>,
    #[serde(default)]
    pub parser: Option<ParserMode>,
    #[serde(default)]
    pub open: Option<bool>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading profile from: {:?}", path);

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {:?}", path))?;

        let profile: Profile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse profile: {:?}", path))?;

        Ok(profile)
    }
}

impl ConversionConfig {
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        let input = input.into();
        let output = resolve_output_path(&input, output);
        Self {
            input,
            output,
            passes: Passes::default(),
            parser: ParserMode::default(),
            open: false,
        }
    }

    pub fn with_labels(mut self, enabled: bool) -> Self {
        self.passes.labels = enabled;
        self
    }

    pub fn with_record_types(mut self, enabled: bool) -> Self {
        self.passes.record_types = enabled;
        self
    }

    pub fn with_parser(mut self, parser: ParserMode) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Fill settings from a profile; call before applying command-line switches
    pub fn with_profile(mut self, profile: &Profile) -> Self {
        if let Some(labels) = profile.labels {
            self.passes.labels = labels;
        }
        if let Some(record_types) = profile.record_types {
            self.passes.record_types = record_types;
        }
        if let Some(parser) = profile.parser {
            self.parser = parser;
        }
        if let Some(open) = profile.open {
            self.open = open;
        }
        self
    }

    /// Check paths before any work is done
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input file not found: {}", self.input.display());
        }
        if !self.input.is_file() {
            bail!("Input path is not a file: {}", self.input.display());
        }
        if !has_extension(&self.input, INPUT_EXTENSION) {
            warn!(
                "Input file {} does not have the .{} extension, parsing anyway",
                self.input.display(),
                INPUT_EXTENSION
            );
        }

        if self.output.is_dir() {
            bail!("Output path is a directory: {}", self.output.display());
        }
        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                bail!("Output directory does not exist: {}", parent.display());
            }
        }
        if !has_extension(&self.output, OUTPUT_EXTENSION) {
            warn!(
                "Output file {} does not have the .{} extension, writing an .{} workbook anyway",
                self.output.display(),
                OUTPUT_EXTENSION,
                OUTPUT_EXTENSION
            );
        }
        if is_same_file(&self.input, &self.output)? {
            bail!("Output path must differ from the input file: {}", self.output.display());
        }

        Ok(())
    }
}

/// Compares canonical paths; the output may not exist yet, so its parent is resolved instead
fn is_same_file(input: &Path, output: &Path) -> Result<bool> {
    let input = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;

    let output = match (output.parent(), output.file_name()) {
        _ if output.exists() => fs::canonicalize(output)
            .with_context(|| format!("Failed to resolve output path: {}", output.display()))?,
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
            fs::canonicalize(parent)
                .with_context(|| format!("Failed to resolve output directory: {}", parent.display()))?
                .join(name)
        }
        _ => output.to_path_buf(),
    };

    Ok(input == output)
}

/// Default output sits next to the input; a path without extension gets `.xlsx`
pub fn resolve_output_path(input: &Path, output: Option<PathBuf>) -> PathBuf {
    match output {
        Some(path) if path.extension().is_none() => path.with_extension(OUTPUT_EXTENSION),
        Some(path) => path,
        None => input.with_extension(OUTPUT_EXTENSION),
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
