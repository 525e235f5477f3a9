// Spreadsheet output: one row per scan, in the column order of the shared
// "Documents" sheet.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde_json::{Map, Value};

use crate::models::{Field, ScanRecord};
use crate::utils::ScanError;

pub const SHEET_HEADERS: [&str; 18] = [
    "Timestamp",
    "Document Type",
    "Name",
    "ID Number",
    "Date of Birth",
    "Gender",
    "Address",
    "Father Name",
    "Nationality",
    "Issue Date",
    "Expiry Date",
    "Place of Issue",
    "District",
    "State",
    "Pincode",
    "Other Info 1",
    "Other Info 2",
    "Raw Text",
];

/// Cells for one scan, aligned with `SHEET_HEADERS`. Missing fields are
/// empty cells; District and State are never extracted.
pub fn sheet_row(record: &ScanRecord, timestamp: DateTime<Utc>) -> Vec<String> {
    let fields = &record.extracted_data;
    let cell = |field: Field| fields.get(field).unwrap_or_default().to_string();

    vec![
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        record.document_type.to_string(),
        cell(Field::Name),
        fields.id_number().unwrap_or_default().to_string(),
        cell(Field::DateOfBirth),
        cell(Field::Gender),
        cell(Field::Address),
        cell(Field::FatherName),
        cell(Field::Nationality),
        cell(Field::IssueDate),
        cell(Field::ExpiryDate),
        cell(Field::PlaceOfIssue),
        String::new(),
        String::new(),
        cell(Field::Pincode),
        cell(Field::OtherInfo1),
        cell(Field::OtherInfo2),
        record.raw_text.clone(),
    ]
}

/// Append-only tabular store.
pub trait SheetWriter {
    fn append_row(&mut self, sheet_id: &str, row: &[String]) -> Result<(), ScanError>;
}

/// Keeps rows in memory, grouped by sheet.
#[derive(Debug, Default)]
pub struct MemorySheet {
    rows: Vec<(String, Vec<String>)>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, sheet_id: &str) -> Vec<&[String]> {
        self.rows
            .iter()
            .filter(|(id, _)| id == sheet_id)
            .map(|(_, row)| row.as_slice())
            .collect()
    }
}

impl SheetWriter for MemorySheet {
    fn append_row(&mut self, sheet_id: &str, row: &[String]) -> Result<(), ScanError> {
        self.rows.push((sheet_id.to_string(), row.to_vec()));
        Ok(())
    }
}

/// Appends each row as a JSON object keyed by header, one per line.
pub struct JsonLinesSheet {
    path: PathBuf,
}

impl JsonLinesSheet {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SheetWriter for JsonLinesSheet {
    fn append_row(&mut self, sheet_id: &str, row: &[String]) -> Result<(), ScanError> {
        if row.len() != SHEET_HEADERS.len() {
            return Err(ScanError::SheetError(format!(
                "expected {} cells, got {}",
                SHEET_HEADERS.len(),
                row.len()
            )));
        }

        let mut cells = Map::new();
        for (header, value) in SHEET_HEADERS.iter().zip(row) {
            cells.insert(header.to_string(), Value::String(value.clone()));
        }
        let mut object = Map::new();
        object.insert("sheetId".to_string(), Value::String(sheet_id.to_string()));
        object.insert("row".to_string(), Value::Object(cells));

        let line = serde_json::to_string(&Value::Object(object))
            .map_err(|e| ScanError::SheetError(format!("Failed to serialize row: {}", e)))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ScanError::SheetError(format!("Failed to open {}: {}", self.path.display(), e))
            })?;
        writeln!(file, "{}", line)?;
        debug!("appended row to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentType, ExtractedFields};
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn passport_record() -> ScanRecord {
        let mut fields = ExtractedFields::new();
        fields.insert(Field::Name, "ROHIT SINGH");
        fields.insert(Field::PassportNumber, "8369854");
        fields.insert(Field::PlaceOfIssue, "DEHRADUN");
        ScanRecord {
            document_type: DocumentType::Passport,
            raw_text: "PASSPORT ...".to_string(),
            extracted_data: fields,
            confidence: 80.0,
            script: None,
        }
    }

    #[test]
    fn test_row_layout() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        let row = sheet_row(&passport_record(), timestamp);

        assert_eq!(row.len(), SHEET_HEADERS.len());
        assert_eq!(row[0], "2024-05-01T10:30:00.000Z");
        assert_eq!(row[1], "passport");
        assert_eq!(row[2], "ROHIT SINGH");
        assert_eq!(row[3], "8369854");
        assert_eq!(row[11], "DEHRADUN");
        assert_eq!(row[12], "");
        assert_eq!(row[13], "");
        assert_eq!(row[17], "PASSPORT ...");
    }

    #[test]
    fn test_memory_sheet_groups_by_id() {
        let mut sheet = MemorySheet::new();
        sheet.append_row("a", &["1".to_string()]).unwrap();
        sheet.append_row("b", &["2".to_string()]).unwrap();
        sheet.append_row("a", &["3".to_string()]).unwrap();
        assert_eq!(sheet.rows("a").len(), 2);
        assert_eq!(sheet.rows("b")[0], ["2".to_string()]);
        assert!(sheet.rows("c").is_empty());
    }

    #[test]
    fn test_json_lines_sheet_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.jsonl");
        let mut sheet = JsonLinesSheet::new(&path);
        let row = sheet_row(&passport_record(), Utc::now());
        sheet.append_row("sheet-1", &row).unwrap();
        sheet.append_row("sheet-1", &row).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["sheetId"], "sheet-1");
        assert_eq!(value["row"]["ID Number"], "8369854");
        assert_eq!(value["row"]["District"], "");
    }

    #[test]
    fn test_json_lines_sheet_rejects_short_rows() {
        let dir = tempdir().unwrap();
        let mut sheet = JsonLinesSheet::new(dir.path().join("rows.jsonl"));
        let err = sheet.append_row("s", &["only".to_string()]).unwrap_err();
        assert!(matches!(err, ScanError::SheetError(_)));
    }
}
