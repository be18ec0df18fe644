//! Result workbook and input template writers.
//!
//! Column order and number formats mirror the operator-facing report:
//! price in CNY at five decimals, quantity thousands-separated.

use crate::error::AppError;
use crate::resolver::ResultRow;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::Path;

/// Fixed column order of the result sheet.
pub const RESULT_HEADERS: [&str; 10] = [
    "Part Number",
    "Matched Part",
    "Product",
    "Brand",
    "Price (CNY)",
    "Max Qty (pcs)",
    "Stock",
    "Discontinued",
    "Replacement",
    "Remark",
];

/// Template columns for the input side.
pub const TEMPLATE_HEADERS: [&str; 2] = ["Part Number", "Description"];

const TEMPLATE_SAMPLE_ROWS: [[&str; 2]; 3] = [
    ["LM358DR", "op-amp"],
    ["ESP32-WROOM-32D", "wifi/bt module"],
    ["TL072CDR", "low-noise JFET dual op-amp"],
];

/// Write the result rows to a styled xlsx workbook.
pub fn write_results(path: &Path, rows: &[ResultRow]) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Results")?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x4F81BD));
    let price_format = Format::new().set_num_format("\"¥\"#,##0.00000");
    let zero_price_format = Format::new().set_num_format("\"¥\"0");
    let quantity_format = Format::new().set_num_format("#,##0");

    for (col, header) in RESULT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, result) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &result.part_number)?;
        worksheet.write_string(row, 1, &result.matched_part)?;
        worksheet.write_string(row, 2, &result.product)?;
        worksheet.write_string(row, 3, &result.brand)?;
        let price_fmt = if result.price > 0.0 {
            &price_format
        } else {
            &zero_price_format
        };
        worksheet.write_number_with_format(row, 4, result.price, price_fmt)?;
        worksheet.write_number_with_format(row, 5, result.max_quantity as f64, &quantity_format)?;
        worksheet.write_string(row, 6, &result.availability)?;
        worksheet.write_string(row, 7, if result.discontinued { "yes" } else { "no" })?;
        worksheet.write_string(row, 8, &result.replacement)?;
        worksheet.write_string(row, 9, &result.remark)?;
    }

    worksheet.autofit();
    workbook.save(path)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "result workbook written");
    Ok(())
}

/// Write the blank input template with a few sample parts.
pub fn write_template(path: &Path) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;

    writer
        .write_record(TEMPLATE_HEADERS)
        .map_err(|e| AppError::Export(e.to_string()))?;
    for row in TEMPLATE_SAMPLE_ROWS {
        writer
            .write_record(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::Export(e.to_string()))?;

    tracing::info!(path = %path.display(), "input template written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ResultRow {
        ResultRow {
            part_number: "LM358DR".to_string(),
            matched_part: "LM358DR".to_string(),
            product: "LM358DR".to_string(),
            brand: "Texas Instruments".to_string(),
            price: 0.8,
            max_quantity: 100,
            availability: "5000 In Stock".to_string(),
            discontinued: false,
            replacement: String::new(),
            remark: String::new(),
        }
    }

    #[test]
    fn test_write_results_produces_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_results(&path, &[sample_row(), ResultRow::not_found("NOPE")]).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_template_round_trips_through_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.csv");
        write_template(&path).unwrap();

        let parts = crate::import::read_part_list(&path).unwrap();
        assert_eq!(parts, ["LM358DR", "ESP32-WROOM-32D", "TL072CDR"]);
    }
}
