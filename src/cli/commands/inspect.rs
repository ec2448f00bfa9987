use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::workbook::ExcelWorkbook;

#[derive(Args)]
pub struct InspectCommands {
    /// Workbook to read
    pub workbook: PathBuf,
    /// Print this sheet as CSV instead of the overview
    #[arg(short, long)]
    pub sheet: Option<String>,
}

pub fn handle_inspect_command(cmd: InspectCommands) -> Result<()> {
    if let Some(sheet) = &cmd.sheet {
        let data = ExcelWorkbook::read_sheet(&cmd.workbook, sheet)?;
        print!("{}", data.to_csv()?);
        return Ok(());
    }

    println!("{}", cmd.workbook.display().to_string().bold());
    for sheet in ExcelWorkbook::read_all(&cmd.workbook)? {
        println!(
            "  {:<12} {} rows  [{}]",
            sheet.name.cyan(),
            sheet.rows.len(),
            sheet.headers.join(", ").dimmed()
        );
    }

    Ok(())
}
