//! RecordType sheet

use anyhow::Result;
use rust_xlsxwriter::*;

use crate::metadata::RecordTypeRow;
use super::super::helpers::{write_header_row, write_text_row};

pub const RECORD_TYPE_SHEET: &str = "RecordType";

pub fn create_record_type_sheet(workbook: &mut Workbook, rows: &[RecordTypeRow]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(RECORD_TYPE_SHEET)?;

    write_header_row(sheet, &["RecordType", "Field", "Value"])?;

    for (row, record_type) in (1u32..).zip(rows) {
        write_text_row(
            sheet,
            row,
            &[record_type.record_type.as_str(), record_type.field.as_str(), record_type.value.as_str()],
        )?;
    }

    sheet.autofit();
    Ok(())
}
