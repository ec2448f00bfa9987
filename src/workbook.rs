//! Read generated workbooks back for inspection

use anyhow::{Context, Result, anyhow};
use calamine::{Reader, Xlsx, open_workbook};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ExcelWorkbook {
    pub sheets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExcelWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let workbook: Xlsx<_> = open_workbook(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
        let sheets = workbook.sheet_names().to_owned();

        if sheets.is_empty() {
            return Err(anyhow!("Excel file contains no sheets"));
        }

        Ok(ExcelWorkbook { sheets })
    }

    pub fn read_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<SheetData> {
        let path = path.as_ref();
        let mut workbook: Xlsx<_> = open_workbook(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| anyhow!("Error reading sheet '{}': {}", sheet_name, e))?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<String>>());

        let headers = rows.next().unwrap_or_default();
        let rows = rows.collect();

        Ok(SheetData {
            name: sheet_name.to_string(),
            headers,
            rows,
        })
    }

    /// Every sheet in workbook order
    pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<SheetData>> {
        let path = path.as_ref();
        let workbook = Self::open(path)?;
        workbook
            .sheets
            .iter()
            .map(|name| Self::read_sheet(path, name))
            .collect()
    }
}

impl SheetData {
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }

        let bytes = writer.into_inner().map_err(|e| anyhow!("Failed to flush CSV: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Values of one column, by header name
    pub fn column(&self, header: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == header)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map_or("", String::as_str))
                .collect(),
        )
    }
}
