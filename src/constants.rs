//! Application constants for the test case processor
//!
//! This module contains default field values, export schemas, sentinel
//! markers, and time-estimate parameters used throughout the application.

// =============================================================================
// Canonical Field Defaults
// =============================================================================

/// Default priority when the column is absent or empty
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Default category when the column is absent or empty
pub const DEFAULT_CATEGORY: &str = "Functional";

/// Default test type when the column is absent or empty
pub const DEFAULT_TEST_TYPE: &str = "Smoke";

/// Quality score assigned when the source cell has no parseable number
pub const UNSCORED_QUALITY: f64 = 0.0;

// =============================================================================
// Generator Output Sentinels
// =============================================================================

/// Prefix of separator lines emitted between generator output sections
pub const SECTION_SEPARATOR_PREFIX: &str = "---";

/// Substring marking generator metadata lines interleaved with data rows
pub const METADATA_MARKER: &str = "METADATA";

/// Header cell tokens used to locate the real header row in noisy output
pub const HEADER_PROBE_TOKENS: &[&str] = &["testid", "test id", "title"];

// =============================================================================
// Export Schemas
// =============================================================================

/// Column headers for the plain CSV export
pub const PLAIN_CSV_COLUMNS: &[&str] = &[
    "Test ID",
    "Title",
    "Steps",
    "Expected Result",
    "Priority",
    "Quality Score",
];

/// Column headers for the spreadsheet grid export
pub const SPREADSHEET_COLUMNS: &[&str] = &[
    "Test ID",
    "Title",
    "Steps",
    "Expected Result",
    "Priority",
    "Category",
    "Type",
    "Quality Score",
];

/// Column headers for the Zephyr test-management import schema
pub const ZEPHYR_COLUMNS: &[&str] = &[
    "Name",
    "Status",
    "Precondition",
    "Objective",
    "Folder",
    "Priority",
    "Component",
    "Labels",
    "Owner",
    "Estimated Time",
    "Coverage (Issues)",
    "Coverage (Pages)",
    "Step",
    "Test Data",
    "Expected Result",
    "Plain Text Script",
    "BDD Script",
];

/// Zephyr status applied to every imported case
pub const ZEPHYR_STATUS: &str = "Approved";

/// Zephyr folder applied to every imported case
pub const ZEPHYR_FOLDER: &str = "/Test Cases";

// =============================================================================
// Time Estimate Parameters
// =============================================================================

/// Estimated execution minutes per test step
pub const MINUTES_PER_STEP: u32 = 2;

/// Minimum estimated execution time in minutes
pub const MIN_ESTIMATE_MINUTES: u32 = 5;

// =============================================================================
// BDD Keyword Sniffing
// =============================================================================

/// Lowercased words marking a step as an action (`When` keyword)
pub const ACTION_WORDS: &[&str] = &["click", "enter", "select", "submit"];

/// Lowercased words marking a step as an assertion (`Then` keyword)
pub const ASSERTION_WORDS: &[&str] = &["verify", "should", "check"];

// =============================================================================
// File Discovery
// =============================================================================

/// File extensions considered generator output during batch conversion
pub const GENERATOR_OUTPUT_EXTENSIONS: &[&str] = &["txt", "csv", "out"];
