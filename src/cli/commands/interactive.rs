use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{ConversionConfig, Profile, resolve_output_path};
use crate::convert;
use crate::metadata::ParserMode;
use crate::ui::prompts::{prompt_confirmation, text_input};
use super::convert::print_summary;

#[derive(Args)]
pub struct InteractiveCommands {
    /// TOML file with default settings
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// How the object file is read
    #[arg(long, value_enum)]
    pub parser: Option<ParserMode>,
}

pub fn handle_interactive_command(cmd: InteractiveCommands) -> Result<()> {
    let profile = match &cmd.config {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };

    println!();
    println!("Object File Reader");
    println!("==================");

    let input = PathBuf::from(text_input("Input file (*.object)", None)?.trim());
    let default_output = resolve_output_path(&input, None);
    let output = text_input(
        "Output Excel file",
        Some(&default_output.display().to_string()),
    )?;

    let mut config = ConversionConfig::new(input, Some(PathBuf::from(output.trim())))
        .with_profile(&profile);
    if let Some(parser) = cmd.parser {
        config = config.with_parser(parser);
    }

    let record_types = prompt_confirmation("RecordType dependencies?", config.passes.record_types)?;
    let labels = prompt_confirmation("Label-API conversion?", config.passes.labels)?;
    config = config.with_record_types(record_types).with_labels(labels);

    if !prompt_confirmation("Create Excel file?", true)? {
        println!("{} Cancelled.", "❌".bright_red().bold());
        return Ok(());
    }

    let summary = convert::run(&config)?;
    print_summary(&summary);
    Ok(())
}
