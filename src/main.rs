//! vdiff command-line interface.
//!
//! Parses the two input files, computes the structural diff, applies any
//! path filters, and prints the report. Exit code 0 means no differences
//! survived filtering, 1 means differences were found, 2 means a failure.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use vdiff::{
    compute_diff, filter_report, format_report, parse_file, FilterConfig, OutputFormat,
    OutputOptions,
};

/// Structural diff for JSON-like value trees
///
/// Compares an expected document against an actual one, reporting type
/// mismatches, value mismatches, missing and unexpected keys, and array
/// length mismatches. Key order and formatting never count as differences.
#[derive(Parser)]
#[command(name = "vdiff")]
#[command(version)]
#[command(about = "Structural diff for JSON-like value trees", long_about = None)]
struct Cli {
    /// The expected (reference) document
    #[arg(value_name = "EXPECTED")]
    expected: PathBuf,

    /// The actual document to check against it
    #[arg(value_name = "ACTUAL")]
    actual: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: OutputFormatArg,

    /// Ignore differences at paths matching this pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Only report differences at paths matching this pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    only: Vec<String>,

    /// Show full values instead of previews
    #[arg(long)]
    show_values: bool,

    /// Maximum length for displayed values
    #[arg(long, default_value = "80")]
    max_value_length: usize,

    /// Verbose output (show progress on stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormatArg {
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
    /// Plain text (no colors)
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if cli.verbose {
        eprintln!("Parsing {}...", cli.expected.display());
    }
    let expected = parse_file(&cli.expected)
        .with_context(|| format!("Failed to parse expected file: {}", cli.expected.display()))?;

    if cli.verbose {
        eprintln!("Parsing {}...", cli.actual.display());
    }
    let actual = parse_file(&cli.actual)
        .with_context(|| format!("Failed to parse actual file: {}", cli.actual.display()))?;

    if cli.verbose {
        eprintln!("Computing diff...");
    }
    let report = compute_diff(&expected, &actual);

    let mut filters = FilterConfig::new();
    for pattern in &cli.ignore {
        filters = filters.ignore(pattern);
    }
    for pattern in &cli.only {
        filters = filters.only(pattern);
    }
    let report = filter_report(&report, &filters);

    let options = OutputOptions {
        show_values: cli.show_values,
        max_value_length: cli.max_value_length,
    };

    let output = format_report(&report, &cli.format.into(), &options)
        .context("Failed to format diff report")?;

    if cli.quiet {
        for line in output.lines() {
            if !line.starts_with("Summary:") && !line.trim().is_empty() {
                println!("{}", line);
            }
        }
    } else {
        println!("{}", output);
    }

    if report.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_conversion() {
        assert_eq!(
            OutputFormat::from(OutputFormatArg::Terminal),
            OutputFormat::Terminal
        );
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(OutputFormatArg::Plain), OutputFormat::Plain);
    }
}
