//! Shared fixtures for export formatter tests


use crate::app::models::TestCaseRecord;

/// The canonical example record used across formatter tests
pub fn login_record() -> TestCaseRecord {
    let mut record = TestCaseRecord::with_defaults();
    record.id = "TC-001".to_string();
    record.title = "Login works".to_string();
    record.steps = vec!["Enter user".to_string(), "Click login".to_string()];
    record.expected = "User is logged in".to_string();
    record.priority = "High".to_string();
    record
}

/// A record exercising escaping: commas, quotes, and a quality score
pub fn tricky_record() -> TestCaseRecord {
    let mut record = TestCaseRecord::with_defaults();
    record.id = "TC-002".to_string();
    record.title = "Handles \"quotes\", commas".to_string();
    record.steps = vec![
        "Open page".to_string(),
        "Enter name, surname".to_string(),
        "Verify the greeting".to_string(),
    ];
    record.expected = "Greeting shows name".to_string();
    record.quality_score = 9.0;
    record
}
