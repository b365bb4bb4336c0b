//! Row-to-record mapping for generator output
//!
//! Zips tokenized row values against the located header positionally and
//! dispatches each cell to its canonical field through the alias table.
//! The only gate is the required-field check: a row without a non-empty id
//! and title is rejected with a [`SkipReason`] instead of an error.

use crate::app::models::TestCaseRecord;
use crate::constants::{DEFAULT_CATEGORY, DEFAULT_PRIORITY, DEFAULT_TEST_TYPE};

use super::field_decoders::{decode_defaulted, decode_quality_score, decode_steps};
use super::header::{CanonicalField, HeaderRow, normalize_extra_key};
use super::stats::SkipReason;

/// Default values applied to fields whose columns are absent or empty
#[derive(Debug, Clone)]
pub struct RecordDefaults {
    pub priority: String,
    pub category: String,
    pub test_type: String,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            test_type: DEFAULT_TEST_TYPE.to_string(),
        }
    }
}

/// Map one tokenized row onto a canonical record
///
/// Values are zipped against header columns positionally; surplus values
/// beyond the header width are ignored. Returns the skip reason instead of
/// a record when the required-field gate fails.
pub fn map_row(
    fields: &[String],
    header: &HeaderRow,
    defaults: &RecordDefaults,
) -> Result<TestCaseRecord, SkipReason> {
    let mut record = TestCaseRecord::with_defaults();
    record.priority = defaults.priority.clone();
    record.category = defaults.category.clone();
    record.test_type = defaults.test_type.clone();

    for (binding, value) in header.columns.iter().zip(fields) {
        match binding.field {
            Some(CanonicalField::Id) => record.id = value.trim().to_string(),
            Some(CanonicalField::Title) => record.title = value.trim().to_string(),
            Some(CanonicalField::Steps) => record.steps = decode_steps(value),
            Some(CanonicalField::Expected) => record.expected = value.trim().to_string(),
            Some(CanonicalField::Priority) => {
                record.priority = decode_defaulted(value, &defaults.priority);
            }
            Some(CanonicalField::Category) => {
                record.category = decode_defaulted(value, &defaults.category);
            }
            Some(CanonicalField::TestType) => {
                record.test_type = decode_defaulted(value, &defaults.test_type);
            }
            Some(CanonicalField::QualityScore) => {
                record.quality_score = decode_quality_score(value);
            }
            None => {
                record
                    .extra
                    .insert(normalize_extra_key(&binding.name), value.clone());
            }
        }
    }

    if record.id.is_empty() {
        return Err(SkipReason::MissingId);
    }
    if record.title.is_empty() {
        return Err(SkipReason::MissingTitle);
    }

    Ok(record)
}
