//! Formatting helpers for Excel export

use rust_xlsxwriter::*;

pub fn create_header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
}
