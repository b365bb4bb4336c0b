use clap::Parser;
use std::process;
use testcase_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Test Case Processor - Generator Output Converter");
    println!("================================================");
    println!();
    println!("Convert raw output from LLM-based test-case generators into normalized");
    println!("test cases with CSV, spreadsheet, and Zephyr export formats.");
    println!();
    println!("USAGE:");
    println!("    testcase-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert generator output into an export format (main command)");
    println!("    inspect     Parse generator output and report statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a generator output file to plain CSV:");
    println!("    testcase-processor convert --input raw_output.txt --output test_cases.csv");
    println!();
    println!("    # Convert a whole directory to Zephyr import files:");
    println!("    testcase-processor convert --input-dir ./outputs --output-dir ./exports \\");
    println!("                               --format zephyr");
    println!();
    println!("    # Inspect what the parser sees, including skipped rows:");
    println!("    testcase-processor inspect --input raw_output.txt --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    testcase-processor <COMMAND> --help");
}
