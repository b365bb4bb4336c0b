//! Header-row location and column alias resolution
//!
//! Generator output may open with banner text, blank lines, or separator
//! rows before the real CSV header. This module finds the header line by
//! probing for known header tokens, then binds each column position to a
//! canonical field through a static alias table.

use crate::constants::{HEADER_PROBE_TOKENS, METADATA_MARKER, SECTION_SEPARATOR_PREFIX};

use super::tokenizer::tokenize_line;

/// Canonical fields of a test-case record that source columns can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalField {
    Id,
    Title,
    Steps,
    Expected,
    Priority,
    Category,
    TestType,
    QualityScore,
}

/// Static alias table: normalized (lowercased, trimmed) header name to
/// canonical field. Adding a new alias is a one-line change here.
const FIELD_ALIASES: &[(&str, CanonicalField)] = &[
    ("testid", CanonicalField::Id),
    ("test id", CanonicalField::Id),
    ("title", CanonicalField::Title),
    ("steps", CanonicalField::Steps),
    ("expected result", CanonicalField::Expected),
    ("expected", CanonicalField::Expected),
    ("priority", CanonicalField::Priority),
    ("category", CanonicalField::Category),
    ("type", CanonicalField::TestType),
    ("quality score", CanonicalField::QualityScore),
];

/// Resolve a raw header name to a canonical field, case-insensitively
pub fn resolve_alias(name: &str) -> Option<CanonicalField> {
    let normalized = name.trim().to_lowercase();
    FIELD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, field)| *field)
}

/// Normalize an unrecognized header name into an extra-field key
/// (lowercased, spaces replaced by underscores)
pub fn normalize_extra_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// One column of the located header: its source name and, when the name
/// matches the alias table, the canonical field it feeds
#[derive(Debug, Clone)]
pub struct ColumnBinding {
    /// Column name as it appeared in the header line (unquoted, trimmed)
    pub name: String,

    /// Canonical field this column maps to, if recognized
    pub field: Option<CanonicalField>,
}

/// The located header row of a generator output blob
#[derive(Debug, Clone)]
pub struct HeaderRow {
    /// Ordered column bindings, one per header cell
    pub columns: Vec<ColumnBinding>,
}

impl HeaderRow {
    /// Scan lines top-to-bottom for the first plausible header line
    ///
    /// A line qualifies when its lowercased content contains any of the
    /// probe tokens (`testid`, `test id`, `title`). Returns the line index
    /// and the parsed header, or `None` when no line qualifies - the
    /// caller reports this as a "no valid data" condition, not an error.
    pub fn locate(lines: &[&str]) -> Option<(usize, HeaderRow)> {
        let index = lines.iter().position(|line| {
            let lowered = line.to_lowercase();
            HEADER_PROBE_TOKENS
                .iter()
                .any(|token| lowered.contains(token))
        })?;

        Some((index, Self::from_line(lines[index])))
    }

    /// Tokenize a header line into column bindings
    pub fn from_line(line: &str) -> HeaderRow {
        let columns = tokenize_line(line)
            .into_iter()
            .map(|name| {
                let field = resolve_alias(&name);
                ColumnBinding { name, field }
            })
            .collect();

        HeaderRow { columns }
    }

    /// Number of columns the header declares
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Count of columns that resolved to canonical fields
    pub fn recognized_count(&self) -> usize {
        self.columns.iter().filter(|c| c.field.is_some()).count()
    }
}

/// Check whether a data-section line is a generator sentinel to skip:
/// blank after trim, a `---` separator, or a metadata marker line
pub fn is_sentinel_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with(SECTION_SEPARATOR_PREFIX)
        || trimmed.contains(METADATA_MARKER)
}
