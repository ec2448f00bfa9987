//! Helper functions for Excel export

use anyhow::Result;
use rust_xlsxwriter::*;
use std::path::Path;
use std::process::Command;

use super::formatting::create_header_format;

/// Write the header row at row 0 and freeze it
pub fn write_header_row(sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let header_format = create_header_format();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Write one data row of plain strings starting at column 0
pub fn write_text_row(sheet: &mut Worksheet, row: u32, cells: &[&str]) -> Result<()> {
    for (col, cell) in cells.iter().enumerate() {
        sheet.write_string(row, col as u16, *cell)?;
    }
    Ok(())
}

/// Launchers tried in order for the current platform
fn open_commands(file_path: &Path) -> Vec<Command> {
    let with_arg = |program: &str, args: &[&str]| {
        let mut command = Command::new(program);
        command.args(args).arg(file_path);
        command
    };

    if cfg!(target_os = "windows") {
        // Empty string after start is the window title
        vec![with_arg("cmd", &["/c", "start", ""])]
    } else if cfg!(target_os = "macos") {
        vec![with_arg("open", &[])]
    } else {
        vec![with_arg("libreoffice", &["--calc"]), with_arg("xdg-open", &[])]
    }
}

/// Hand the written workbook to the desktop; failure only logs, the file is already saved
pub fn try_open_file(file_path: &Path) {
    let mut last_error = None;

    for mut command in open_commands(file_path) {
        match command.spawn() {
            Ok(_) => {
                log::info!("Opened {} with {:?}", file_path.display(), command.get_program());
                return;
            }
            Err(e) => {
                log::debug!("Launcher {:?} failed: {}", command.get_program(), e);
                last_error = Some(e);
            }
        }
    }

    if let Some(e) = last_error {
        log::warn!("Could not open {} ({}), open it manually", file_path.display(), e);
    }
}
