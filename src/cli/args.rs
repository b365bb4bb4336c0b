//! Command-line argument definitions for the test case processor
//!
//! This module defines the complete CLI interface using the clap derive API,
//! along with per-command validation of argument combinations.

use crate::config::FORMAT_NAMES;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the test case processor
///
/// Converts raw output from LLM-based test-case generators into normalized
/// test cases with CSV, spreadsheet, and Zephyr export formats.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "testcase-processor",
    version,
    about = "Convert raw test-case generator output into CSV, spreadsheet, and Zephyr formats",
    long_about = "Parses the loosely-structured text an LLM test-case generator emits, \
                  normalizes it into canonical test-case records, and exports the result \
                  as plain CSV, a spreadsheet grid, or a Zephyr test-management import file. \
                  Parsing is fail-soft: malformed rows are dropped and reported, never fatal."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the test case processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert generator output into an export format (main command)
    Convert(ConvertArgs),
    /// Parse generator output and report statistics without exporting
    Inspect(InspectArgs),
}

/// Export formats for the convert command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Plain 6-column CSV
    Csv,
    /// Spreadsheet cell grid (written as a quoted CSV for spreadsheet apps)
    Sheet,
    /// Zephyr test-management import CSV
    Zephyr,
}

impl ExportFormat {
    /// File extension for generated output files
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Sheet => "sheet.csv",
            ExportFormat::Zephyr => "zephyr.csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "sheet" => Ok(ExportFormat::Sheet),
            "zephyr" => Ok(ExportFormat::Zephyr),
            other => Err(Error::configuration(format!(
                "Unknown export format '{}'. Available formats: {}",
                other,
                FORMAT_NAMES.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Sheet => "sheet",
            ExportFormat::Zephyr => "zephyr",
        };
        write!(f, "{}", name)
    }
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input file containing raw generator output
    ///
    /// Reads from stdin when neither --input nor --input-dir is given.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input file with raw generator output (stdin if omitted)",
        conflicts_with = "input_dir"
    )]
    pub input: Option<PathBuf>,

    /// Directory of generator output files to convert in batch
    ///
    /// Every .txt, .csv, and .out file found under this directory is
    /// converted. Requires --output-dir (or a configured output directory).
    #[arg(
        long = "input-dir",
        value_name = "DIR",
        help = "Convert every generator output file under this directory"
    )]
    pub input_dir: Option<PathBuf>,

    /// Output file for the export
    ///
    /// Writes to stdout when omitted in single-input mode.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (stdout if omitted)",
        conflicts_with = "input_dir"
    )]
    pub output: Option<PathBuf>,

    /// Output directory for batch conversion
    ///
    /// Created if it does not exist. Generated files are named after their
    /// input file with the export format's extension.
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory for batch conversion"
    )]
    pub output_dir: Option<PathBuf>,

    /// Export format
    ///
    /// Falls back to the configured default format (plain CSV out of the box).
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        value_name = "FORMAT",
        help = "Export format: csv, sheet, or zephyr"
    )]
    pub format: Option<ExportFormat>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/testcase-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input file containing raw generator output
    ///
    /// Reads from stdin when omitted.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input file with raw generator output (stdin if omitted)"
    )]
    pub input: Option<PathBuf>,

    /// Report format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: ReportFormat,

    /// Number of records to preview in the report
    #[arg(
        short = 'n',
        long = "preview",
        value_name = "COUNT",
        default_value_t = 5,
        help = "Number of records to preview"
    )]
    pub preview: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Report format options for the inspect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    Human,
    /// JSON report for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(input_dir) = &self.input_dir {
            if !input_dir.exists() {
                return Err(Error::configuration(format!(
                    "Input directory does not exist: {}",
                    input_dir.display()
                )));
            }

            if !input_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_dir.display()
                )));
            }
        }

        if self.output_dir.is_some() && self.input_dir.is_none() {
            return Err(Error::configuration(
                "--output-dir requires --input-dir".to_string(),
            ));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn base_convert_args() -> ConvertArgs {
        ConvertArgs {
            input: None,
            input_dir: None,
            output: None,
            output_dir: None,
            format: None,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_export_format_parsing() {
        // str::parse avoids the from_str ambiguity between FromStr and the
        // derived ValueEnum
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            " Zephyr ".parse::<ExportFormat>().unwrap(),
            ExportFormat::Zephyr
        );
        assert_eq!(
            "sheet".parse::<ExportFormat>().unwrap(),
            ExportFormat::Sheet
        );
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Zephyr.extension(), "zephyr.csv");
    }

    #[test]
    fn test_convert_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        // Stdin mode validates cleanly
        let args = base_convert_args();
        assert!(args.validate().is_ok());

        // Nonexistent input rejected
        let mut args = base_convert_args();
        args.input = Some(PathBuf::from("/nonexistent/file.txt"));
        assert!(args.validate().is_err());

        // Existing input dir accepted
        let mut args = base_convert_args();
        args.input_dir = Some(temp_dir.path().to_path_buf());
        args.output_dir = Some(temp_dir.path().join("out"));
        assert!(args.validate().is_ok());

        // output-dir without input-dir rejected
        let mut args = base_convert_args();
        args.output_dir = Some(temp_dir.path().to_path_buf());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = base_convert_args();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }
}
