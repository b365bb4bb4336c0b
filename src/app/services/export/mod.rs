//! Export formatters for canonical test-case records
//!
//! Three independent, pure serializers over `&[TestCaseRecord]`:
//! - [`plain_csv`] - fixed 6-column CSV with always-quoted free-text fields
//! - [`spreadsheet`] - row-major cell grid for a spreadsheet-writing collaborator
//! - [`zephyr`] - 17-column Zephyr import CSV with derived BDD script and
//!   time estimate
//!
//! Formatters build strings and grids only; writing the result to a file or
//! clipboard is the caller's concern.

pub mod plain_csv;
pub mod spreadsheet;
pub mod zephyr;

#[cfg(test)]
pub mod tests;

pub use spreadsheet::SheetGrid;
