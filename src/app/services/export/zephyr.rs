//! Zephyr-format CSV export
//!
//! Serializes records into the 17-column Zephyr test-management import
//! schema. Several columns are derived: a comma-joined label list, a
//! step-count-based time estimate, a numbered plain-text script, and a
//! Gherkin-style BDD script whose keywords are chosen by content-sniffing
//! each step.

use crate::app::models::TestCaseRecord;
use crate::app::services::generator_output::tokenizer::to_csv_field;
use crate::constants::{
    ACTION_WORDS, ASSERTION_WORDS, MIN_ESTIMATE_MINUTES, MINUTES_PER_STEP, ZEPHYR_COLUMNS,
    ZEPHYR_FOLDER, ZEPHYR_STATUS,
};

/// Serialize records as a Zephyr import CSV document
pub fn to_csv(records: &[TestCaseRecord]) -> String {
    let mut output = String::new();
    output.push_str(&ZEPHYR_COLUMNS.join(","));
    output.push('\n');

    for record in records {
        let row = [
            record.title.clone(),
            ZEPHYR_STATUS.to_string(),
            String::new(), // Precondition
            String::new(), // Objective
            ZEPHYR_FOLDER.to_string(),
            record.priority.clone(),
            String::new(), // Component
            record.labels().join(","),
            String::new(), // Owner
            format_estimate(record.step_count()),
            String::new(), // Coverage (Issues)
            String::new(), // Coverage (Pages)
            record.steps.join("\n"),
            String::new(), // Test Data
            record.expected.clone(),
            plain_text_script(record),
            bdd_script(record),
        ];

        let escaped: Vec<String> = row.iter().map(|field| to_csv_field(field)).collect();
        output.push_str(&escaped.join(","));
        output.push('\n');
    }

    output
}

/// Estimated execution time from the step count
///
/// `max(steps * 2, 5)` minutes, rendered as `"Nm"` under an hour, else
/// `"Hh Mm"` with the minutes part omitted when it is exactly zero.
pub fn format_estimate(step_count: usize) -> String {
    let minutes = (step_count as u32 * MINUTES_PER_STEP).max(MIN_ESTIMATE_MINUTES);

    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        let hours = minutes / 60;
        let remainder = minutes % 60;
        if remainder == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, remainder)
        }
    }
}

/// Fixed plain-text script template with numbered steps
fn plain_text_script(record: &TestCaseRecord) -> String {
    let numbered: Vec<String> = record
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();

    format!(
        "Steps:\n{}\n\nExpected Result:\n{}",
        numbered.join("\n"),
        record.expected
    )
}

/// Gherkin keyword for a step, chosen by position and content-sniffing
///
/// The first step is always `Given`; action words make a step `When`,
/// assertion words make it `Then`, and everything else is `And`.
pub fn bdd_keyword(index: usize, step: &str) -> &'static str {
    if index == 0 {
        return "Given";
    }

    let lowered = step.to_lowercase();
    if ACTION_WORDS.iter().any(|word| lowered.contains(word)) {
        "When"
    } else if ASSERTION_WORDS.iter().any(|word| lowered.contains(word)) {
        "Then"
    } else {
        "And"
    }
}

/// Gherkin-style BDD script: one `Scenario:` line, one keyword line per
/// step, and a closing `Then <expected>` when an expected result exists
fn bdd_script(record: &TestCaseRecord) -> String {
    let mut lines = vec![format!("Scenario: {}", record.title)];

    for (index, step) in record.steps.iter().enumerate() {
        lines.push(format!("{} {}", bdd_keyword(index, step), step));
    }

    if !record.expected.trim().is_empty() {
        lines.push(format!("Then {}", record.expected));
    }

    lines.join("\n")
}
