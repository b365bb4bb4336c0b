//! Parse statistics and the skipped-row diagnostics channel
//!
//! Rows that cannot become records are dropped without failing the parse;
//! these types record how many and why, so callers can surface an
//! under-population warning instead of a crash.

use serde::{Deserialize, Serialize};

use crate::app::models::TestCaseRecord;

/// Parsing result with accepted records and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed records, in row order
    pub records: Vec<TestCaseRecord>,

    /// Parse statistics and skipped-row diagnostics
    pub stats: ParseStats,
}

impl ParseResult {
    /// An empty result; used when no header line could be located
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    /// Check whether anything was parsed - callers use this to surface a
    /// "no test cases recognized" message
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parsing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseStats {
    /// Whether a plausible header line was located
    pub header_found: bool,

    /// Total number of candidate data rows encountered (sentinel and blank
    /// lines are structure, not data, and are not counted)
    pub total_rows: usize,

    /// Number of rows that became records
    pub records_parsed: usize,

    /// Number of rows dropped
    pub rows_skipped: usize,

    /// Reason for every dropped row, in input order
    pub skipped: Vec<SkippedRow>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            header_found: false,
            total_rows: 0,
            records_parsed: 0,
            rows_skipped: 0,
            skipped: Vec::new(),
        }
    }

    /// Record a dropped row
    pub fn record_skip(&mut self, line_number: usize, reason: SkipReason) {
        self.rows_skipped += 1;
        self.skipped.push(SkippedRow {
            line_number,
            reason,
        });
    }

    /// Calculate success rate as a percentage of candidate rows
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

/// One dropped row and the reason it was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line number within the input blob
    pub line_number: usize,

    /// Why the row was dropped
    pub reason: SkipReason,
}

/// Why a candidate data row was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Row tokenized to fewer fields than the header has columns
    ShortRow { found: usize, expected: usize },

    /// Row mapped without a non-empty id
    MissingId,

    /// Row mapped without a non-empty title
    MissingTitle,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::ShortRow { found, expected } => {
                write!(f, "row has {} fields, header has {}", found, expected)
            }
            SkipReason::MissingId => write!(f, "missing test id"),
            SkipReason::MissingTitle => write!(f, "missing title"),
        }
    }
}
