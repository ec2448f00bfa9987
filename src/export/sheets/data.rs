//! Data sheet: controlling value to dependent value pairs

use anyhow::Result;
use rust_xlsxwriter::*;

use crate::metadata::DependencyRow;
use super::super::helpers::{write_header_row, write_text_row};

pub const DATA_SHEET: &str = "Data";

/// Always created, even when there are no rows
pub fn create_data_sheet(workbook: &mut Workbook, rows: &[DependencyRow]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(DATA_SHEET)?;

    write_header_row(sheet, &["controllingFieldValue", "valueName"])?;

    for (row, dependency) in (1u32..).zip(rows) {
        write_text_row(
            sheet,
            row,
            &[dependency.controlling_field_value.as_str(), dependency.value_name.as_str()],
        )?;
    }

    sheet.autofit();
    Ok(())
}
