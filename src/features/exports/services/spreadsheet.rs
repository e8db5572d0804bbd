//! XLSX rendering of the member register and the collectors list

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

use crate::core::config::ExportConfig;
use crate::core::error::Result;
use crate::features::exports::models::{
    CollectorRow, RegisterRow, COLLECTOR_HEADERS, REGISTER_HEADERS,
};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const REGISTER_COLUMN_WIDTHS: [f64; 10] = [8.0, 15.0, 35.0, 20.0, 20.0, 20.0, 20.0, 10.0, 15.0, 30.0];
const COLLECTOR_COLUMN_WIDTHS: [f64; 6] = [8.0, 30.0, 15.0, 25.0, 25.0, 60.0];

/// Header row of the register (0-based)
pub const REGISTER_HEADER_ROW: u32 = 4;
/// Header row of the collectors list (0-based)
pub const COLLECTOR_HEADER_ROW: u32 = 3;

const THEME_ORANGE: u32 = 0xFF9933;
const HEADER_GREY: u32 = 0xE0E0E0;

fn bordered() -> Format {
    Format::new().set_border(FormatBorder::Thin)
}

/// Sheet "Register": three banner rows, a blank row, headers on row 5
pub fn member_register_xlsx(
    rows: &[RegisterRow],
    config: &ExportConfig,
    today: NaiveDate,
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Register")?;

    for (col, width) in REGISTER_COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    let trust = Format::new()
        .set_bold()
        .set_font_size(18)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let title = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_align(FormatAlign::Center);
    let date = Format::new()
        .set_italic()
        .set_font_size(11)
        .set_align(FormatAlign::Center);

    sheet.merge_range(0, 2, 0, 9, &config.trust_name, &trust)?;
    sheet.set_row_height(0, 30)?;
    sheet.merge_range(1, 2, 1, 9, &config.register_title, &title)?;
    sheet.set_row_height(1, 20)?;
    sheet.merge_range(
        2,
        2,
        2,
        9,
        &format!("दिनांक {} पर्यंतची यादी", today.format("%d/%m/%Y")),
        &date,
    )?;

    let header = bordered()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_background_color(Color::RGB(HEADER_GREY));
    for (col, text) in REGISTER_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(REGISTER_HEADER_ROW, col as u16, *text, &header)?;
    }

    let cell = bordered();
    for (offset, row) in rows.iter().enumerate() {
        let r = REGISTER_HEADER_ROW + 1 + offset as u32;
        sheet.write_number_with_format(r, 0, row.serial as f64, &cell)?;
        for (col, value) in row.text_cells().iter().enumerate() {
            sheet.write_string_with_format(r, col as u16 + 1, *value, &cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Sheet "Collectors": title and date banners, headers on row 4
pub fn collectors_xlsx(rows: &[CollectorRow], today: NaiveDate) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Collectors")?;

    for (col, width) in COLLECTOR_COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    let title = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_align(FormatAlign::Center);
    let centered = Format::new().set_align(FormatAlign::Center);

    sheet.merge_range(0, 1, 0, 5, "संकलक यादी (Collectors List)", &title)?;
    sheet.merge_range(
        1,
        1,
        1,
        5,
        &format!("दिनांक: {}", today.format("%d/%m/%Y")),
        &centered,
    )?;

    let header = bordered()
        .set_bold()
        .set_font_color(Color::White)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(Color::RGB(THEME_ORANGE));
    for (col, text) in COLLECTOR_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(COLLECTOR_HEADER_ROW, col as u16, *text, &header)?;
    }

    let cell = bordered()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_align(FormatAlign::Left);
    for (offset, row) in rows.iter().enumerate() {
        let r = COLLECTOR_HEADER_ROW + 1 + offset as u32;
        sheet.write_number_with_format(r, 0, row.serial as f64, &cell)?;
        for (col, value) in row.text_cells().iter().enumerate() {
            sheet.write_string_with_format(r, col as u16 + 1, *value, &cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
