//! Command implementations for the test case processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod convert;
pub mod inspect;
pub mod shared;

pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `convert`: parse generator output and write an export file
/// - `inspect`: parse generator output and report statistics
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Convert(convert_args) => {
            convert::run_convert(convert_args)?;
            Ok(())
        }
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
