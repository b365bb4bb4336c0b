//! Parsing orchestration for generator output blobs
//!
//! Coordinates header location, sentinel skipping, tokenization, and row
//! mapping over the complete raw text. Content problems never propagate as
//! errors: the worst case is an empty [`ParseResult`] that the caller
//! reports as "no test cases recognized".

use std::path::Path;
use tracing::{debug, info, warn};

use crate::{Error, Result};

use super::header::{HeaderRow, is_sentinel_line};
use super::record_mapper::{RecordDefaults, map_row};
use super::stats::{ParseResult, ParseStats, SkipReason};
use super::tokenizer::tokenize_line;

/// Parser for raw LLM test-case generator output
///
/// Holds no cross-call state beyond the field defaults, so concurrent
/// invocations for different generations are independent.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOutputParser {
    defaults: RecordDefaults,
}

impl GeneratorOutputParser {
    /// Create a parser with the standard field defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with configured field defaults
    pub fn with_defaults(defaults: RecordDefaults) -> Self {
        Self { defaults }
    }

    /// Parse a complete raw text blob into records and statistics
    ///
    /// Infallible by design: generator text is structurally unreliable, and
    /// a parse failure must not crash the surrounding workflow. The caller
    /// detects failure via an empty record list.
    pub fn parse_text(&self, content: &str) -> ParseResult {
        let lines: Vec<&str> = content.lines().collect();

        let Some((header_index, header)) = HeaderRow::locate(&lines) else {
            warn!("No header line found in generator output");
            return ParseResult::empty();
        };

        let mut stats = ParseStats::new();
        stats.header_found = true;
        debug!(
            "Header located at line {}: {} columns, {} recognized",
            header_index + 1,
            header.column_count(),
            header.recognized_count()
        );

        let mut records = Vec::new();

        for (offset, line) in lines[header_index + 1..].iter().enumerate() {
            let line_number = header_index + 2 + offset;

            if is_sentinel_line(line) {
                continue;
            }

            stats.total_rows += 1;
            let fields = tokenize_line(line);

            if fields.len() < header.column_count() {
                stats.record_skip(
                    line_number,
                    SkipReason::ShortRow {
                        found: fields.len(),
                        expected: header.column_count(),
                    },
                );
                debug!("Skipped short row at line {}", line_number);
                continue;
            }

            match map_row(&fields, &header, &self.defaults) {
                Ok(record) => {
                    records.push(record);
                    stats.records_parsed += 1;
                }
                Err(reason) => {
                    debug!("Skipped row at line {}: {}", line_number, reason);
                    stats.record_skip(line_number, reason);
                }
            }
        }

        info!(
            "Parsed {} test cases from {} rows ({} skipped)",
            stats.records_parsed, stats.total_rows, stats.rows_skipped
        );

        ParseResult { records, stats }
    }

    /// Parse a generator output file
    ///
    /// I/O failures are real errors; content problems still degrade to an
    /// empty result.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing generator output file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            )
        })?;

        Ok(self.parse_text(&content))
    }
}
