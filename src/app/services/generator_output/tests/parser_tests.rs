//! Tests for parse orchestration over full generator output blobs

use super::{clean_output, noisy_output};
use crate::app::services::generator_output::stats::SkipReason;
use crate::app::services::generator_output::GeneratorOutputParser;
use std::io::Write;

#[test]
fn test_parse_clean_output() {
    let result = GeneratorOutputParser::new().parse_text(clean_output());

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.id, "TC-001");
    assert_eq!(record.title, "Login works");
    assert_eq!(record.steps, vec!["Enter user", "Click login"]);
    assert_eq!(record.expected, "User is logged in");
    assert_eq!(record.priority, "High");

    assert!(result.stats.header_found);
    assert_eq!(result.stats.total_rows, 1);
    assert_eq!(result.stats.records_parsed, 1);
    assert_eq!(result.stats.rows_skipped, 0);
}

#[test]
fn test_parse_noisy_output_skips_sentinels() {
    // Banner lines, a "---" separator, and a METADATA line are structure,
    // not data; only the three genuine rows are parsed
    let result = GeneratorOutputParser::new().parse_text(&noisy_output());

    assert_eq!(result.records.len(), 3);
    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.rows_skipped, 0);

    let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["TC-001", "TC-002", "TC-003"]);

    // Empty priority cell defaulted
    assert_eq!(result.records[1].priority, "Medium");
    // "N/A" quality score degrades to unscored
    assert_eq!(result.records[2].quality_score, 0.0);
    assert_eq!(result.records[0].quality_score, 8.5);
}

#[test]
fn test_parse_no_header_yields_empty() {
    let result = GeneratorOutputParser::new()
        .parse_text("The model could not generate test cases.\nPlease retry.");

    assert!(result.is_empty());
    assert!(!result.stats.header_found);
    assert_eq!(result.stats.total_rows, 0);
}

#[test]
fn test_parse_empty_input() {
    let result = GeneratorOutputParser::new().parse_text("");
    assert!(result.is_empty());
    assert!(!result.stats.header_found);
}

#[test]
fn test_short_rows_are_dropped_with_diagnostics() {
    let raw = "TestID,Title,Steps,Expected Result\n\
               TC-001,Complete row,Step one,Done\n\
               TC-002,Truncated row\n\
               TC-003,Another complete,Step one,Done";
    let result = GeneratorOutputParser::new().parse_text(raw);

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.rows_skipped, 1);

    let skipped = &result.stats.skipped[0];
    assert_eq!(skipped.line_number, 3);
    assert_eq!(
        skipped.reason,
        SkipReason::ShortRow {
            found: 2,
            expected: 4
        }
    );
}

#[test]
fn test_rows_without_required_fields_are_dropped() {
    let raw = "TestID,Title,Priority\n\
               ,No id here,High\n\
               TC-002,,High\n\
               TC-003,Kept,High";
    let result = GeneratorOutputParser::new().parse_text(raw);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, "TC-003");

    let reasons: Vec<&SkipReason> = result.stats.skipped.iter().map(|s| &s.reason).collect();
    assert_eq!(reasons, vec![&SkipReason::MissingId, &SkipReason::MissingTitle]);
}

#[test]
fn test_success_rate() {
    let raw = "TestID,Title\nTC-1,Kept\n,Dropped\nTC-2,Kept too\nTC-3,And this";
    let result = GeneratorOutputParser::new().parse_text(raw);

    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.stats.records_parsed, 3);
    assert!((result.stats.success_rate() - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_quoted_cells_with_commas() {
    let raw = "TestID,Title,Steps\n\
               TC-001,\"Login, then logout\",\"Enter user, password|Click login\"";
    let result = GeneratorOutputParser::new().parse_text(raw);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].title, "Login, then logout");
    assert_eq!(
        result.records[0].steps,
        vec!["Enter user, password", "Click login"]
    );
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", clean_output()).unwrap();

    let result = GeneratorOutputParser::new().parse_file(file.path()).unwrap();
    assert_eq!(result.records.len(), 1);
}

#[test]
fn test_parse_file_missing() {
    let result =
        GeneratorOutputParser::new().parse_file(std::path::Path::new("/nonexistent/raw.txt"));
    assert!(result.is_err());
}
