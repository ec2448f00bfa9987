//! API-Label sheet: picklist value API names next to their display labels

use anyhow::Result;
use rust_xlsxwriter::*;

use crate::metadata::LabelRow;
use super::super::helpers::{write_header_row, write_text_row};

pub const API_LABEL_SHEET: &str = "API-Label";

pub fn create_api_label_sheet(workbook: &mut Workbook, rows: &[LabelRow]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(API_LABEL_SHEET)?;

    write_header_row(sheet, &["Field FullName", "Value FullName", "Label"])?;

    for (row, label) in (1u32..).zip(rows) {
        write_text_row(
            sheet,
            row,
            &[label.field_full_name.as_str(), label.value_full_name.as_str(), label.label.as_str()],
        )?;
    }

    sheet.autofit();
    Ok(())
}
