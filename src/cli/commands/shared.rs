//! Shared components for CLI commands
//!
//! Common helpers used across command implementations: logging setup,
//! input/output plumbing, the spreadsheet grid writer, and conversion
//! statistics.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::app::services::export::SheetGrid;
use crate::app::services::generator_output::tokenizer::to_csv_field;
use crate::{Error, Result};

/// Conversion statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of input files converted
    pub files_converted: usize,
    /// Number of records parsed across all inputs
    pub records_parsed: usize,
    /// Number of rows skipped across all inputs
    pub rows_skipped: usize,
    /// Number of inputs that yielded no records
    pub empty_inputs: usize,
}

/// Set up structured logging
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("testcase_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read the raw input text from a file, or from stdin when no path is given
///
/// Returns the content together with a display label for reporting.
pub fn read_input(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(file) => {
            if !file.exists() {
                return Err(Error::file_not_found(file.display().to_string()));
            }
            let content = std::fs::read_to_string(file)
                .map_err(|e| Error::io(format!("Failed to read {}", file.display()), e))?;
            Ok((content, file.display().to_string()))
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| Error::io("Failed to read stdin", e))?;
            Ok((content, "<stdin>".to_string()))
        }
    }
}

/// Write rendered output to a file, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(file) => {
            std::fs::write(file, content)
                .map_err(|e| Error::io(format!("Failed to write {}", file.display()), e))?;
            debug!("Wrote {} bytes to {}", content.len(), file.display());
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

/// Render a spreadsheet grid as a quoted CSV document
///
/// The grid formatter itself stays pure; this is the writing collaborator
/// that turns cells into something spreadsheet applications open directly.
pub fn grid_to_csv(grid: &SheetGrid) -> String {
    let mut output = String::new();
    for row in grid.rows() {
        let escaped: Vec<String> = row.iter().map(|cell| to_csv_field(cell)).collect();
        output.push_str(&escaped.join(","));
        output.push('\n');
    }
    output
}

/// Create a progress bar for batch conversion
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar
}
