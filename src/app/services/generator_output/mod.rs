//! Parser for raw LLM test-case generator output
//!
//! This module turns the loosely-structured text a generator emits into
//! canonical [`TestCaseRecord`](crate::app::models::TestCaseRecord) values.
//! The input is treated as hostile: banner lines, section separators, and
//! metadata sentinels may surround the real CSV table, and individual rows
//! may be truncated or missing required fields. Parsing never fails to the
//! caller; problems shrink the record list and are reported through
//! [`ParseStats`].
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parsing orchestration over the full text blob
//! - [`tokenizer`] - Hand-rolled CSV line tokenizer with quote handling
//! - [`header`] - Header-row location and the column alias table
//! - [`field_decoders`] - Cell-level decoding (steps lists, quality scores)
//! - [`record_mapper`] - Row-to-record mapping with the required-field gate
//! - [`stats`] - Parse statistics and the skipped-row diagnostics channel
//!
//! ## Usage
//!
//! ```rust
//! use testcase_processor::app::services::generator_output::GeneratorOutputParser;
//!
//! let raw = "TestID,Title,Steps,Expected Result\n\
//!            TC-001,Login works,Enter user|Click login,User is logged in";
//! let result = GeneratorOutputParser::new().parse_text(raw);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.stats.records_parsed, 1);
//! ```

pub mod field_decoders;
pub mod header;
pub mod parser;
pub mod record_mapper;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::{CanonicalField, HeaderRow};
pub use parser::GeneratorOutputParser;
pub use record_mapper::RecordDefaults;
pub use stats::{ParseResult, ParseStats, SkipReason, SkippedRow};
