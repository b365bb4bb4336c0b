//! Data models for test case processing
//!
//! This module contains the canonical test-case record that all parsing and
//! export components operate on. Records are constructed fresh from each
//! parse call and carry no identity beyond the parse batch.

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_PRIORITY, DEFAULT_TEST_TYPE, UNSCORED_QUALITY};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical test-case record
///
/// The normalized in-memory representation produced by the generator output
/// parser and consumed by every export formatter. A record is only accepted
/// into a parse result when both `id` and `title` are non-empty after
/// trimming; all other fields degrade to documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseRecord {
    /// Test case identifier (e.g., "TC-001")
    pub id: String,

    /// Human-readable test case title
    pub title: String,

    /// Ordered execution steps, decoded from pipe-, newline-, or
    /// numbered-list-delimited source text
    pub steps: Vec<String>,

    /// Expected result / acceptance text (may be empty)
    pub expected: String,

    /// Test priority (defaults to "Medium")
    pub priority: String,

    /// Test category (defaults to "Functional")
    pub category: String,

    /// Test type (defaults to "Smoke")
    pub test_type: String,

    /// Quality score in the range 0-10; 0 means unscored
    pub quality_score: f64,

    /// Unrecognized source columns, retained under normalized
    /// (lowercased, space-to-underscore) keys
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

impl TestCaseRecord {
    /// Create an empty record carrying the documented field defaults
    pub fn with_defaults() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            steps: Vec::new(),
            expected: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            test_type: DEFAULT_TEST_TYPE.to_string(),
            quality_score: UNSCORED_QUALITY,
            extra: HashMap::new(),
        }
    }

    /// Validate record data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::data_validation(
                "Test case id cannot be empty".to_string(),
            ));
        }

        if self.title.trim().is_empty() {
            return Err(Error::data_validation(
                "Test case title cannot be empty".to_string(),
            ));
        }

        if self.quality_score < 0.0 {
            return Err(Error::data_validation(format!(
                "Quality score {} cannot be negative",
                self.quality_score
            )));
        }

        Ok(())
    }

    /// Number of execution steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Check whether a quality score was extracted from the source
    pub fn has_quality_score(&self) -> bool {
        self.quality_score > 0.0
    }

    /// Quality score rendered for export: "N.N/10", or "N/A" when unscored
    pub fn quality_label(&self) -> String {
        if self.has_quality_score() {
            format!("{:.1}/10", self.quality_score)
        } else {
            "N/A".to_string()
        }
    }

    /// Category/type labels for test-management import, skipping blanks
    pub fn labels(&self) -> Vec<&str> {
        [self.category.as_str(), self.test_type.as_str()]
            .into_iter()
            .filter(|label| !label.trim().is_empty())
            .collect()
    }

    /// Get an extra field by its normalized key
    pub fn get_extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> TestCaseRecord {
        TestCaseRecord {
            id: "TC-001".to_string(),
            title: "Login works".to_string(),
            steps: vec!["Enter user".to_string(), "Click login".to_string()],
            expected: "User is logged in".to_string(),
            priority: "High".to_string(),
            category: "Functional".to_string(),
            test_type: "Smoke".to_string(),
            quality_score: 7.5,
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_record_creation_valid() {
        let record = create_test_record();
        assert!(record.validate().is_ok());
        assert_eq!(record.step_count(), 2);
    }

    #[test]
    fn test_record_defaults() {
        let record = TestCaseRecord::with_defaults();
        assert_eq!(record.priority, "Medium");
        assert_eq!(record.category, "Functional");
        assert_eq!(record.test_type, "Smoke");
        assert_eq!(record.quality_score, 0.0);
        assert!(record.steps.is_empty());

        // Defaults alone do not make a valid record
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_required_fields() {
        let mut record = create_test_record();

        record.id = "  ".to_string();
        assert!(record.validate().is_err());

        record.id = "TC-001".to_string();
        record.title = "".to_string();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_negative_score_rejected() {
        let mut record = create_test_record();
        record.quality_score = -1.0;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_quality_label() {
        let mut record = create_test_record();
        assert_eq!(record.quality_label(), "7.5/10");

        record.quality_score = 8.0;
        assert_eq!(record.quality_label(), "8.0/10");

        record.quality_score = 0.0;
        assert!(!record.has_quality_score());
        assert_eq!(record.quality_label(), "N/A");
    }

    #[test]
    fn test_labels_skip_blanks() {
        let mut record = create_test_record();
        assert_eq!(record.labels(), vec!["Functional", "Smoke"]);

        record.test_type = "".to_string();
        assert_eq!(record.labels(), vec!["Functional"]);

        record.category = " ".to_string();
        assert!(record.labels().is_empty());
    }

    #[test]
    fn test_extra_field_access() {
        let mut record = create_test_record();
        record
            .extra
            .insert("automation_status".to_string(), "Manual".to_string());

        assert_eq!(record.get_extra("automation_status"), Some("Manual"));
        assert_eq!(record.get_extra("missing"), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let record = create_test_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TestCaseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
