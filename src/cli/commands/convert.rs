//! Convert command implementation
//!
//! Parses one generator output (file or stdin) or a whole directory of
//! them, renders the selected export format, and writes the result. An
//! input that yields zero records is a warning, not a failure: the raw
//! text stays available to the user through other surfaces, so conversion
//! must never crash on malformed generator output.

use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::shared::{
    ConversionStats, create_progress_bar, grid_to_csv, read_input, setup_logging, write_output,
};
use crate::app::services::export::{plain_csv, spreadsheet, zephyr};
use crate::app::services::generator_output::GeneratorOutputParser;
use crate::cli::args::{ConvertArgs, ExportFormat};
use crate::config::Config;
use crate::constants::GENERATOR_OUTPUT_EXTENSIONS;
use crate::{Error, Result, TestCaseRecord};

/// Convert command runner
pub fn run_convert(args: ConvertArgs) -> Result<ConversionStats> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting test case conversion");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = Config::load_layered(args.config_file.as_deref())?;
    debug!("Loaded configuration: {:?}", config);

    let format = match args.format {
        Some(format) => format,
        None => config.output.default_format.parse()?,
    };
    debug!("Export format: {}", format);

    let parser = GeneratorOutputParser::with_defaults(config.record_defaults());

    match &args.input_dir {
        Some(input_dir) => run_batch(&args, &config, &parser, format, input_dir),
        None => run_single(&args, &parser, format),
    }
}

/// Convert a single input (file or stdin) to a single output (file or stdout)
fn run_single(
    args: &ConvertArgs,
    parser: &GeneratorOutputParser,
    format: ExportFormat,
) -> Result<ConversionStats> {
    let (content, source) = read_input(args.input.as_deref())?;
    let result = parser.parse_text(&content);

    let mut stats = ConversionStats {
        files_converted: 1,
        records_parsed: result.stats.records_parsed,
        rows_skipped: result.stats.rows_skipped,
        empty_inputs: 0,
    };

    if result.is_empty() {
        stats.empty_inputs = 1;
        warn!("No test cases were parsed from {}", source);
        if !args.quiet {
            eprintln!(
                "{}",
                format!("Warning: no test cases were parsed from {}", source).yellow()
            );
        }
    }

    let rendered = render(format, &result.records);
    write_output(args.output.as_deref(), &rendered)?;

    if !args.quiet && args.output.is_some() {
        eprintln!(
            "{} {} test case(s) exported as {} to {}",
            "✓".green(),
            result.stats.records_parsed,
            format,
            args.output.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
        );
    }

    Ok(stats)
}

/// Convert every generator output file under a directory
fn run_batch(
    args: &ConvertArgs,
    config: &Config,
    parser: &GeneratorOutputParser,
    format: ExportFormat,
    input_dir: &Path,
) -> Result<ConversionStats> {
    let start_time = Instant::now();

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output.output_dir.clone())
        .ok_or_else(|| {
            Error::configuration(
                "Batch conversion requires --output-dir or a configured output directory",
            )
        })?;

    std::fs::create_dir_all(&output_dir).map_err(|e| {
        Error::io(
            format!("Failed to create output directory {}", output_dir.display()),
            e,
        )
    })?;

    let files = discover_generator_files(input_dir)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No generator output files found in {}",
            input_dir.display()
        )));
    }

    info!(
        "Converting {} file(s) from {}",
        files.len(),
        input_dir.display()
    );

    let progress = if args.show_progress() {
        Some(create_progress_bar(files.len() as u64))
    } else {
        None
    };

    let mut stats = ConversionStats::default();

    for file in &files {
        if let Some(bar) = &progress {
            bar.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
        }

        let result = parser.parse_file(file)?;
        if result.is_empty() {
            stats.empty_inputs += 1;
            warn!("No test cases were parsed from {}", file.display());
        }

        let rendered = render(format, &result.records);
        let output_path = output_dir.join(output_file_name(file, format));
        write_output(Some(&output_path), &rendered)?;

        stats.files_converted += 1;
        stats.records_parsed += result.stats.records_parsed;
        stats.rows_skipped += result.stats.rows_skipped;

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    if !args.quiet {
        print_batch_summary(&stats, &output_dir, start_time);
    }

    Ok(stats)
}

/// Render records in the selected export format
fn render(format: ExportFormat, records: &[TestCaseRecord]) -> String {
    match format {
        ExportFormat::Csv => plain_csv::to_csv(records),
        ExportFormat::Sheet => grid_to_csv(&spreadsheet::to_grid(records)),
        ExportFormat::Zephyr => zephyr::to_csv(records),
    }
}

/// Find generator output files under a directory, sorted for stable order
fn discover_generator_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(input_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let is_candidate = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                GENERATOR_OUTPUT_EXTENSIONS.contains(&ext.to_lowercase().as_str())
            });

        if is_candidate {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Name a batch output file after its input with the format's extension
fn output_file_name(input: &Path, format: ExportFormat) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    format!("{}.{}", stem, format.extension())
}

/// Print the human-readable batch summary
fn print_batch_summary(stats: &ConversionStats, output_dir: &Path, start_time: Instant) {
    println!();
    println!("{}", "Conversion complete".green().bold());
    println!("  Files converted:  {}", stats.files_converted);
    println!("  Records parsed:   {}", stats.records_parsed);
    if stats.rows_skipped > 0 {
        println!(
            "  Rows skipped:     {}",
            stats.rows_skipped.to_string().yellow()
        );
    }
    if stats.empty_inputs > 0 {
        println!(
            "  Empty inputs:     {}",
            stats.empty_inputs.to_string().yellow()
        );
    }
    println!("  Output directory: {}", output_dir.display());
    println!(
        "  Elapsed:          {}",
        indicatif::HumanDuration(start_time.elapsed())
    );
}
