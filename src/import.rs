//! Part-list input: a CSV column picked by recognized header (else the
//! first column), or one identifier per non-blank line of a text file.

use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Header names recognized as the part-number column, checked in order.
const PART_NUMBER_HEADERS: &[&str] = &[
    "Part Number",
    "PartNumber",
    "part_number",
    "MPN",
    "元件型号",
    "型号",
];

/// Read a part-number list, dispatching on file extension.
pub fn read_part_list(path: &Path) -> Result<Vec<String>, AppError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => read_csv(path),
        Some("txt") | None => read_txt(path),
        Some(other) => Err(AppError::Import(format!(
            "unsupported input format '.{other}', use .csv or .txt"
        ))),
    }
}

fn read_csv(path: &Path) -> Result<Vec<String>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;

    let headers = reader.headers()?.clone();
    let column = PART_NUMBER_HEADERS
        .iter()
        .find_map(|name| headers.iter().position(|h| h.trim() == *name))
        .unwrap_or(0);

    let mut parts = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(column) {
            let value = value.trim();
            if !value.is_empty() {
                parts.push(value.to_string());
            }
        }
    }
    Ok(parts)
}

fn read_txt(path: &Path) -> Result<Vec<String>, AppError> {
    let content =
        fs::read_to_string(path).map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::TempPath {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.into_temp_path()
    }

    #[test]
    fn test_csv_recognized_header() {
        let path = write_temp(
            ".csv",
            "Description,Part Number\nop-amp,LM358DR\nmodule, ESP32-WROOM-32D \n,\n",
        );
        let parts = read_part_list(&path).unwrap();
        assert_eq!(parts, ["LM358DR", "ESP32-WROOM-32D"]);
    }

    #[test]
    fn test_csv_chinese_header() {
        let path = write_temp(".csv", "元件型号,元件描述\nTL072CDR,双运放\n");
        let parts = read_part_list(&path).unwrap();
        assert_eq!(parts, ["TL072CDR"]);
    }

    #[test]
    fn test_csv_falls_back_to_first_column() {
        let path = write_temp(".csv", "ref,qty\nLM358DR,10\nTL072CDR,5\n");
        let parts = read_part_list(&path).unwrap();
        assert_eq!(parts, ["LM358DR", "TL072CDR"]);
    }

    #[test]
    fn test_txt_trims_and_drops_blanks() {
        let path = write_temp(".txt", "LM358DR\n\n  TL072CDR  \n\t\n");
        let parts = read_part_list(&path).unwrap();
        assert_eq!(parts, ["LM358DR", "TL072CDR"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let path = write_temp(".pdf", "whatever");
        assert!(matches!(
            read_part_list(&path),
            Err(AppError::Import(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(read_part_list(Path::new("no/such/file.txt")).is_err());
    }
}
