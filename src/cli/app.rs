use super::commands::convert::ConvertCommands;
use super::commands::inspect::InspectCommands;
use super::commands::interactive::InteractiveCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "object-xlsx")]
#[command(about = "Convert Salesforce object metadata files into Excel workbooks")]
#[command(version)]
pub struct Cli {
    /// Write log output to this file (truncated on each run) instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an .object file into a workbook
    Convert(ConvertCommands),
    /// Fill in the conversion form step by step
    Interactive(InteractiveCommands),
    /// Show the sheets of a generated workbook
    Inspect(InspectCommands),
}
