//! Formatting diff reports for terminals, pipes, and machines.
//!
//! # Examples
//!
//! ```
//! use vdiff::{compute_diff, parse_json, format_report, OutputFormat, OutputOptions};
//!
//! let expected = parse_json("1").unwrap();
//! let actual = parse_json("2").unwrap();
//! let report = compute_diff(&expected, &actual);
//!
//! let text = format_report(&report, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
//! assert!(text.contains("1 → 2"));
//! ```

use crate::diff::{Diff, DiffKind, DiffReport, DiffStats};
use crate::error::OutputError;
use crate::tree::Value;
use colored::*;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes.
    Terminal,
    /// JSON representation of the report.
    Json,
    /// Plain text, no colors (suitable for piping).
    Plain,
}

/// Options controlling how diffs are rendered.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Render full values as JSON instead of short previews.
    pub show_values: bool,
    /// Maximum length for previewed values.
    pub max_value_length: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            show_values: false,
            max_value_length: 80,
        }
    }
}

/// Formats a diff report according to the format and options.
pub fn format_report(
    report: &DiffReport,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_text(report, options, true)),
        OutputFormat::Plain => Ok(format_text(report, options, false)),
        OutputFormat::Json => format_json(report),
    }
}

fn format_text(report: &DiffReport, options: &OutputOptions, colorize: bool) -> String {
    if report.is_empty() {
        let notice = "No structural differences found.";
        return if colorize {
            notice.dimmed().to_string()
        } else {
            notice.to_string()
        };
    }

    let mut output = String::new();
    for diff in &report.diffs {
        let line = format_diff_line(diff, options);
        if colorize {
            output.push_str(&colorize_line(&line, diff.kind));
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&report.stats));
    output
}

/// One line per diff: a kind symbol, the locus, and the detail.
fn format_diff_line(diff: &Diff, options: &OutputOptions) -> String {
    let path = diff.path_string();

    match diff.kind {
        DiffKind::TypeMismatch => {
            let expected = diff.expected.as_ref().map_or("?", Value::kind_name);
            let actual = diff.actual.as_ref().map_or("?", Value::kind_name);
            format!("! {}: expected {}, found {}", path, expected, actual)
        }
        DiffKind::ValueMismatch => {
            let expected = format_value(diff.expected.as_ref(), options);
            let actual = format_value(diff.actual.as_ref(), options);
            format!("~ {}: {} → {}", path, expected, actual)
        }
        DiffKind::ExpectedKeyMissing => {
            let expected = format_value(diff.expected.as_ref(), options);
            format!("- {}: {}", path, expected)
        }
        DiffKind::UnexpectedKeyPresent => {
            let actual = format_value(diff.actual.as_ref(), options);
            format!("+ {}: {}", path, actual)
        }
        DiffKind::ArrayLengthMismatch => {
            format!(
                "# {}: expected {}, found {}",
                path,
                item_count(diff.expected.as_ref()),
                item_count(diff.actual.as_ref())
            )
        }
    }
}

fn colorize_line(line: &str, kind: DiffKind) -> String {
    match kind {
        DiffKind::TypeMismatch => line.magenta().to_string(),
        DiffKind::ValueMismatch => line.yellow().to_string(),
        DiffKind::ExpectedKeyMissing => line.red().to_string(),
        DiffKind::UnexpectedKeyPresent => line.green().to_string(),
        DiffKind::ArrayLengthMismatch => line.cyan().to_string(),
    }
}

fn format_value(value: Option<&Value>, options: &OutputOptions) -> String {
    match value {
        Some(v) if options.show_values => serde_json::to_string(&value_to_json(v))
            .unwrap_or_else(|_| v.preview(options.max_value_length)),
        Some(v) => v.preview(options.max_value_length),
        None => "(absent)".to_string(),
    }
}

fn item_count(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(arr)) if arr.len() == 1 => "1 item".to_string(),
        Some(Value::Array(arr)) => format!("{} items", arr.len()),
        _ => "?".to_string(),
    }
}

/// Formats the report as JSON, with kinds in snake_case and values as
/// plain JSON rather than tagged enums.
fn format_json(report: &DiffReport) -> Result<String, OutputError> {
    use serde_json::json;

    let diffs: Vec<serde_json::Value> = report
        .diffs
        .iter()
        .map(|d| {
            json!({
                "kind": d.kind,
                "path": d.path_string(),
                "expected": d.expected.as_ref().map(value_to_json),
                "actual": d.actual.as_ref().map(value_to_json),
            })
        })
        .collect();

    let output = json!({
        "diffs": diffs,
        "stats": {
            "type_mismatches": report.stats.type_mismatches,
            "value_mismatches": report.stats.value_mismatches,
            "missing_keys": report.stats.missing_keys,
            "unexpected_keys": report.stats.unexpected_keys,
            "length_mismatches": report.stats.length_mismatches,
            "total": report.stats.total(),
        }
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn format_summary(stats: &DiffStats) -> String {
    if stats.is_empty() {
        return "Summary: no differences".to_string();
    }

    let mut parts = Vec::new();
    if stats.type_mismatches > 0 {
        parts.push(format!("{} type", stats.type_mismatches));
    }
    if stats.value_mismatches > 0 {
        parts.push(format!("{} value", stats.value_mismatches));
    }
    if stats.missing_keys > 0 {
        parts.push(format!("{} missing key", stats.missing_keys));
    }
    if stats.unexpected_keys > 0 {
        parts.push(format!("{} unexpected key", stats.unexpected_keys));
    }
    if stats.length_mismatches > 0 {
        parts.push(format!("{} array length", stats.length_mismatches));
    }

    format!(
        "Summary: {} difference{} ({})",
        stats.total(),
        if stats.total() == 1 { "" } else { "s" },
        parts.join(", ")
    )
}

fn value_to_json(value: &Value) -> serde_json::Value {
    use serde_json::json;

    match value {
        Value::Null => json!(null),
        Value::Bool(b) => json!(b),
        Value::Number(n) => json!(n),
        Value::String(s) => json!(s),
        Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(value_to_json).collect())
        }
        Value::Object(map) => {
            let obj: serde_json::Map<String, serde_json::Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect();
            serde_json::Value::Object(obj)
        }
    }
}
