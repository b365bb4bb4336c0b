//! Inspect command implementation
//!
//! Parses generator output without exporting and reports what the parser
//! saw: record counts, skipped-row diagnostics, quality scores, and a
//! preview of the accepted records. This is the surface that makes the
//! parser's silent-drop policy visible.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use super::shared::{read_input, setup_logging};
use crate::app::models::TestCaseRecord;
use crate::app::services::generator_output::{GeneratorOutputParser, ParseResult, SkippedRow};
use crate::cli::args::{InspectArgs, ReportFormat};
use crate::Result;

/// Machine-readable inspection report
#[derive(Debug, Serialize)]
struct InspectReport {
    generated_at: DateTime<Utc>,
    source: String,
    header_found: bool,
    total_rows: usize,
    records_parsed: usize,
    rows_skipped: usize,
    /// Mean of the scored records; absent when none carry a score
    #[serde(skip_serializing_if = "Option::is_none")]
    average_quality_score: Option<f64>,
    skipped: Vec<SkippedRow>,
    preview: Vec<TestCaseRecord>,
}

impl InspectReport {
    fn build(source: &str, result: &ParseResult, preview_count: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.to_string(),
            header_found: result.stats.header_found,
            total_rows: result.stats.total_rows,
            records_parsed: result.stats.records_parsed,
            rows_skipped: result.stats.rows_skipped,
            average_quality_score: average_quality(&result.records),
            skipped: result.stats.skipped.clone(),
            preview: result.records.iter().take(preview_count).cloned().collect(),
        }
    }
}

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let (content, source) = read_input(args.input.as_deref())?;
    let result = GeneratorOutputParser::new().parse_text(&content);
    info!(
        "Inspected {}: {} record(s)",
        source, result.stats.records_parsed
    );

    let report = InspectReport::build(&source, &result, args.preview);

    match args.format {
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ReportFormat::Human => print_human_report(&report, &result),
    }

    Ok(())
}

/// Mean quality score across the records that carry one
fn average_quality(records: &[TestCaseRecord]) -> Option<f64> {
    let scored: Vec<f64> = records
        .iter()
        .filter(|r| r.has_quality_score())
        .map(|r| r.quality_score)
        .collect();

    if scored.is_empty() {
        None
    } else {
        Some(scored.iter().sum::<f64>() / scored.len() as f64)
    }
}

fn print_human_report(report: &InspectReport, result: &ParseResult) {
    println!("{}", format!("Inspection of {}", report.source).bold());
    println!();

    if !report.header_found {
        println!(
            "{}",
            "No header line recognized - no test cases parsed".red()
        );
        return;
    }

    println!("  Data rows:      {}", report.total_rows);
    println!(
        "  Records parsed: {}",
        report.records_parsed.to_string().green()
    );

    if report.rows_skipped > 0 {
        println!(
            "  Rows skipped:   {}",
            report.rows_skipped.to_string().yellow()
        );
        for skipped in &report.skipped {
            println!(
                "    line {}: {}",
                skipped.line_number,
                skipped.reason.to_string().yellow()
            );
        }
    }

    if let Some(average) = report.average_quality_score {
        println!("  Avg quality:    {:.1}/10", average);
    }

    if !report.preview.is_empty() {
        println!();
        println!("{}", "Preview".bold());
        for record in &report.preview {
            println!(
                "  {} {} [{} / {} / {}] score {}",
                record.id.cyan(),
                record.title,
                record.priority,
                record.category,
                record.test_type,
                record.quality_label()
            );
        }
        if result.records.len() > report.preview.len() {
            println!(
                "  … and {} more",
                result.records.len() - report.preview.len()
            );
        }
    }
}
