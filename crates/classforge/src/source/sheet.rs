//! xlsx row source
//!
//! Reads a class diagram export from the first worksheet of an xlsx
//! workbook. The header row is row 1; the exporter leaves the artifact type
//! column unlabeled, so a blank first header names the meta column, and any
//! later blank header bounds the sheet width. Data rows run from row 2 until
//! the first row with no values.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, span, Level};
use umya_spreadsheet::Worksheet;

use crate::core::row::{is_known_header, META_COLUMN};
use crate::core::{Row, Value};

/// Cell holding the diagram's name in an export
const DIAGRAM_NAME_CELL: &str = "C2";

/// A class diagram export, read into memory in one shot
#[derive(Debug)]
pub struct DiagramSheet {
    name: String,
    rows: Vec<Row>,
}

impl DiagramSheet {
    /// Open an xlsx export and read its name and rows
    pub fn open(path: &Path) -> Result<Self> {
        let open_span = span!(Level::INFO, "open_sheet", path = %path.display());
        let _enter = open_span.enter();

        let book = umya_spreadsheet::reader::xlsx::read(path)
            .with_context(|| format!("failed to read workbook {}", path.display()))?;
        let sheet = book
            .get_sheet_collection()
            .first()
            .ok_or_else(|| anyhow!("workbook {} has no sheets", path.display()))?;

        let name = sheet.get_value(DIAGRAM_NAME_CELL).trim().to_string();
        let rows = read_rows(sheet);
        debug!(name = %name, rows = rows.len(), "Sheet read");

        Ok(Self { name, rows })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_parts(self) -> (String, Vec<Row>) {
        (self.name, self.rows)
    }
}

fn read_rows(sheet: &Worksheet) -> Vec<Row> {
    let (max_col, max_row) = sheet.get_highest_column_and_row();

    // Header row: a blank first cell names the meta column, any later blank
    // cell ends the header row and bounds the sheet width. Unknown headers
    // are remembered so their cells can be skipped below.
    let mut headers: Vec<String> = Vec::new();
    for col in 1..=max_col {
        let raw = sheet.get_value((col, 1));
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if col == 1 {
                headers.push(META_COLUMN.to_string());
            } else {
                break;
            }
        } else {
            headers.push(trimmed.to_string());
        }
    }

    for name in &headers {
        if !is_known_header(name) {
            debug!(header = %name, "Skipping unrecognized column");
        }
    }

    let mut rows = Vec::new();
    for row_index in 2..=max_row {
        let mut row = Row::new();
        for (col_offset, name) in headers.iter().enumerate() {
            let raw = sheet.get_value((col_offset as u32 + 1, row_index));
            if let Some(value) = Value::parse(&raw) {
                row.set(name, value);
            }
        }
        // An all-empty row terminates the export
        if row.is_empty() {
            break;
        }
        rows.push(row);
    }
    rows
}
