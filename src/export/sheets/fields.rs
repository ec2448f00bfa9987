//! Fields sheet

use anyhow::Result;
use rust_xlsxwriter::*;

use crate::metadata::FieldRow;
use super::super::helpers::{write_header_row, write_text_row};

pub const FIELDS_SHEET: &str = "Fields";

pub fn create_fields_sheet(workbook: &mut Workbook, rows: &[FieldRow]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(FIELDS_SHEET)?;

    write_header_row(sheet, &["Field FullName", "Label", "Type"])?;

    for (row, field) in (1u32..).zip(rows) {
        write_text_row(
            sheet,
            row,
            &[field.full_name.as_str(), field.label.as_str(), field.field_type.as_str()],
        )?;
    }

    sheet.autofit();
    Ok(())
}
