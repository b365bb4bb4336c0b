//! Cell-level decoders for generator output fields
//!
//! Generator cells pack sub-formats into plain strings: step lists arrive
//! pipe-, newline-, or numbered-list-delimited, and quality scores arrive
//! as free text like "7.5/10". These decoders are lossy-tolerant and never
//! fail; unparseable input degrades to the documented defaults.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::UNSCORED_QUALITY;

/// First decimal number in a cell, e.g. the "7.5" of "7.5/10"
static DECIMAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid decimal regex"));

/// Decode a steps cell into an ordered step list
///
/// Precedence: split on `|` when present, otherwise on newlines; a cell
/// with neither is a single step. Leading `N. ` or `N) ` list numbering is
/// stripped from every segment. Blank segments are dropped; an empty cell
/// yields an empty list.
pub fn decode_steps(cell: &str) -> Vec<String> {
    let segments: Vec<&str> = if cell.contains('|') {
        cell.split('|').collect()
    } else if cell.contains('\n') {
        cell.lines().collect()
    } else {
        vec![cell]
    };

    segments
        .into_iter()
        .map(|step| strip_step_number(step.trim()).to_string())
        .filter(|step| !step.is_empty())
        .collect()
}

/// Strip a leading `N. ` or `N) ` list number from a step line
fn strip_step_number(step: &str) -> &str {
    let digits = step.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return step;
    }

    let rest = &step[digits..];
    if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
        stripped.trim_start()
    } else {
        step
    }
}

/// Extract a quality score from free text matching the first decimal number
///
/// `"7.5/10"` yields 7.5; text with no number (e.g. `"N/A"`) yields 0.
pub fn decode_quality_score(cell: &str) -> f64 {
    DECIMAL_NUMBER
        .find(cell)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(UNSCORED_QUALITY)
}

/// Decode a cell that falls back to a default when empty after trimming
pub fn decode_defaulted(cell: &str, default: &str) -> String {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
