//! Tests for field decoding and row-to-record mapping

use crate::app::services::generator_output::field_decoders::{
    decode_defaulted, decode_quality_score, decode_steps,
};
use crate::app::services::generator_output::header::HeaderRow;
use crate::app::services::generator_output::record_mapper::{RecordDefaults, map_row};
use crate::app::services::generator_output::stats::SkipReason;

fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn test_decode_steps_pipe_delimited() {
    assert_eq!(
        decode_steps("Enter user|Click login| Verify dashboard "),
        vec!["Enter user", "Click login", "Verify dashboard"]
    );
}

#[test]
fn test_decode_steps_pipe_delimited_with_numbering() {
    assert_eq!(
        decode_steps("1. Open settings | 2. Click reset | 3. Verify banner"),
        vec!["Open settings", "Click reset", "Verify banner"]
    );
}

#[test]
fn test_decode_steps_newline_delimited_with_numbering() {
    assert_eq!(
        decode_steps("1. Enter user\n2. Click login\n3) Verify dashboard"),
        vec!["Enter user", "Click login", "Verify dashboard"]
    );
}

#[test]
fn test_decode_steps_single_and_empty() {
    assert_eq!(decode_steps("Open the page"), vec!["Open the page"]);
    assert!(decode_steps("").is_empty());
    assert!(decode_steps("   ").is_empty());
}

#[test]
fn test_decode_steps_round_trip() {
    // decode(join('|')) == steps for plain step lists
    let steps = vec!["Open page", "Fill form", "Press save"];
    assert_eq!(decode_steps(&steps.join("|")), steps);
}

#[test]
fn test_decode_quality_score() {
    assert_eq!(decode_quality_score("7.5/10"), 7.5);
    assert_eq!(decode_quality_score("Score: 8"), 8.0);
    assert_eq!(decode_quality_score("N/A"), 0.0);
    assert_eq!(decode_quality_score(""), 0.0);
}

#[test]
fn test_decode_defaulted() {
    assert_eq!(decode_defaulted("High", "Medium"), "High");
    assert_eq!(decode_defaulted("  ", "Medium"), "Medium");
    assert_eq!(decode_defaulted("", "Medium"), "Medium");
}

#[test]
fn test_map_row_full() {
    let header = HeaderRow::from_line("TestID,Title,Steps,Expected Result,Priority,Quality Score");
    let defaults = RecordDefaults::default();

    let record = map_row(
        &fields(&[
            "TC-001",
            "Login works",
            "Enter user|Click login",
            "User is logged in",
            "High",
            "7.5/10",
        ]),
        &header,
        &defaults,
    )
    .unwrap();

    assert_eq!(record.id, "TC-001");
    assert_eq!(record.title, "Login works");
    assert_eq!(record.steps, vec!["Enter user", "Click login"]);
    assert_eq!(record.expected, "User is logged in");
    assert_eq!(record.priority, "High");
    assert_eq!(record.quality_score, 7.5);
}

#[test]
fn test_map_row_applies_defaults() {
    let header = HeaderRow::from_line("TestID,Title,Priority,Category,Type");
    let defaults = RecordDefaults::default();

    let record = map_row(
        &fields(&["TC-002", "Defaults apply", "", "", ""]),
        &header,
        &defaults,
    )
    .unwrap();

    assert_eq!(record.priority, "Medium");
    assert_eq!(record.category, "Functional");
    assert_eq!(record.test_type, "Smoke");
    // No steps/score columns at all
    assert!(record.steps.is_empty());
    assert_eq!(record.quality_score, 0.0);
}

#[test]
fn test_map_row_missing_id_rejected() {
    let header = HeaderRow::from_line("TestID,Title,Priority");
    let defaults = RecordDefaults::default();

    let result = map_row(&fields(&["", "Has a title", "High"]), &header, &defaults);
    assert_eq!(result.unwrap_err(), SkipReason::MissingId);
}

#[test]
fn test_map_row_missing_title_rejected() {
    let header = HeaderRow::from_line("TestID,Title");
    let defaults = RecordDefaults::default();

    let result = map_row(&fields(&["TC-003", "   "]), &header, &defaults);
    assert_eq!(result.unwrap_err(), SkipReason::MissingTitle);
}

#[test]
fn test_map_row_retains_extra_columns() {
    let header = HeaderRow::from_line("TestID,Title,Automation Status");
    let defaults = RecordDefaults::default();

    let record = map_row(
        &fields(&["TC-004", "Extra columns", "Manual"]),
        &header,
        &defaults,
    )
    .unwrap();

    assert_eq!(record.get_extra("automation_status"), Some("Manual"));
}

#[test]
fn test_map_row_surplus_values_ignored() {
    let header = HeaderRow::from_line("TestID,Title");
    let defaults = RecordDefaults::default();

    let record = map_row(
        &fields(&["TC-005", "Surplus", "ignored", "also ignored"]),
        &header,
        &defaults,
    )
    .unwrap();

    assert_eq!(record.id, "TC-005");
    assert!(record.extra.is_empty());
}

#[test]
fn test_custom_defaults() {
    let header = HeaderRow::from_line("TestID,Title,Priority");
    let defaults = RecordDefaults {
        priority: "Critical".to_string(),
        category: "Regression".to_string(),
        test_type: "API".to_string(),
    };

    let record = map_row(&fields(&["TC-006", "Custom", ""]), &header, &defaults).unwrap();
    assert_eq!(record.priority, "Critical");
    assert_eq!(record.category, "Regression");
    assert_eq!(record.test_type, "API");
}
