//! Plain CSV export
//!
//! Fixed 6-column layout: Test ID, Title, Steps, Expected Result, Priority,
//! Quality Score. Steps are pipe-joined; free-text fields (title, steps,
//! expected result) are individually quoted regardless of content so the
//! output survives a round trip through the line tokenizer.

use crate::app::models::TestCaseRecord;
use crate::app::services::generator_output::tokenizer::{to_csv_field, to_quoted_csv_field};
use crate::constants::PLAIN_CSV_COLUMNS;

/// Serialize records as a plain CSV document
pub fn to_csv(records: &[TestCaseRecord]) -> String {
    let mut output = String::new();
    output.push_str(&PLAIN_CSV_COLUMNS.join(","));
    output.push('\n');

    for record in records {
        let row = [
            to_csv_field(&record.id),
            to_quoted_csv_field(&record.title),
            to_quoted_csv_field(&record.steps.join(" | ")),
            to_quoted_csv_field(&record.expected),
            to_csv_field(&record.priority),
            record.quality_label(),
        ];
        output.push_str(&row.join(","));
        output.push('\n');
    }

    output
}
