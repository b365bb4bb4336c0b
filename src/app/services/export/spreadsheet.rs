//! Spreadsheet grid export
//!
//! Produces a row-major grid of raw cell values (header row first) rather
//! than a delimited string, for direct consumption by a spreadsheet-writing
//! collaborator. Same logical columns as the plain CSV export plus Category
//! and Type, with steps newline-joined inside their cell.

use crate::app::models::TestCaseRecord;
use crate::constants::SPREADSHEET_COLUMNS;

/// Row-major grid of spreadsheet cell values
///
/// Row 0 is the header. Cells are unescaped; quoting is the writing
/// collaborator's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    /// All rows, header first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Consume the grid into its rows
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Number of rows including the header
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

/// Build the spreadsheet grid for a batch of records
pub fn to_grid(records: &[TestCaseRecord]) -> SheetGrid {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(
        SPREADSHEET_COLUMNS
            .iter()
            .map(|name| (*name).to_string())
            .collect(),
    );

    for record in records {
        rows.push(vec![
            record.id.clone(),
            record.title.clone(),
            record.steps.join("\n"),
            record.expected.clone(),
            record.priority.clone(),
            record.category.clone(),
            record.test_type.clone(),
            record.quality_label(),
        ]);
    }

    SheetGrid { rows }
}
