//! Test utilities for generator output parser testing
//!
//! Shared fixtures used across the parser test modules.

mod mapper_tests;
mod parser_tests;

/// A clean generator output blob with one well-formed data row
pub fn clean_output() -> &'static str {
    "TestID,Title,Steps,Expected Result,Priority\n\
     TC-001,Login works,\"Enter user|Click login\",User is logged in,High"
}

/// A noisy blob: banner lines, separators, and metadata sentinels mixed in
pub fn noisy_output() -> String {
    [
        "Generated test cases for requirement: login.txt",
        "Model: production, temperature 0.2",
        "",
        "--- BEGIN RESULTS ---",
        "TestID,Title,Steps,Expected Result,Priority,Quality Score",
        "TC-001,Login works,Enter user|Click login,User is logged in,High,8.5/10",
        "METADATA: batch 1 of 2",
        "TC-002,Logout works,Click logout,User is logged out,,7/10",
        "---",
        "TC-003,Session expires,Wait 30 minutes|Refresh page,Login page is shown,Low,N/A",
    ]
    .join("\n")
}
