use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{ConversionConfig, Profile};
use crate::convert::{self, ConversionSummary};
use crate::metadata::ParserMode;

#[derive(Args)]
pub struct ConvertCommands {
    /// Salesforce object metadata file (*.object)
    pub input: PathBuf,
    /// Output workbook path (defaults to the input path with .xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Add the API-Label sheet (picklist value API names and labels)
    #[arg(long)]
    pub labels: bool,
    /// Add the RecordType sheet (picklist values per record type)
    #[arg(long)]
    pub record_types: bool,
    /// How the object file is read
    #[arg(long, value_enum)]
    pub parser: Option<ParserMode>,
    /// Open the workbook once it is written
    #[arg(long)]
    pub open: bool,
    /// TOML file with default settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConvertCommands {
    /// Profile values first, then any switches given on the command line
    pub fn to_config(&self) -> Result<ConversionConfig> {
        let mut config = ConversionConfig::new(&self.input, self.output.clone());

        if let Some(path) = &self.config {
            config = config.with_profile(&Profile::load(path)?);
        }
        if self.labels {
            config = config.with_labels(true);
        }
        if self.record_types {
            config = config.with_record_types(true);
        }
        if let Some(parser) = self.parser {
            config = config.with_parser(parser);
        }
        if self.open {
            config = config.with_open(true);
        }

        Ok(config)
    }
}

pub fn handle_convert_command(cmd: ConvertCommands) -> Result<()> {
    let config = cmd.to_config()?;
    log::debug!("Conversion config: {:?}", config);

    println!("{} {}", "Converting".dimmed(), config.input.display());
    let summary = convert::run(&config)?;
    print_summary(&summary);

    Ok(())
}

pub fn print_summary(summary: &ConversionSummary) {
    println!(
        "{} Workbook written to {}",
        "✓".bright_green().bold(),
        summary.output.display().to_string().bright_green().bold()
    );
    println!("  Sheets:          {}", summary.sheets.join(", ").cyan());
    println!("  Dependency rows: {}", summary.dependencies);
    println!("  Field rows:      {}", summary.fields);
    if let Some(labels) = summary.labels {
        println!("  Label rows:      {}", labels);
    }
    if let Some(record_types) = summary.record_types {
        println!("  RecordType rows: {}", record_types);
    }
}
