//! vdiff - structural diff for JSON-like value trees.
//!
//! Compares an "expected" tree against an "actual" tree and reports every
//! discrepancy as a flat, path-anchored record: kind mismatches, unequal
//! scalars, missing and unexpected object keys, and array length
//! mismatches. Reports can be filtered by path to implement selective
//! equality, which makes the crate usable as a test-assertion primitive as
//! well as a CLI.
//!
//! # Example
//!
//! ```
//! use vdiff::{compute_diff, parse_json, filter::FilterConfig, filter_report};
//!
//! let expected = parse_json(r#"{"a": 1, "ts": "2024-01-01"}"#).unwrap();
//! let actual = parse_json(r#"{"a": 1, "ts": "2024-06-30"}"#).unwrap();
//!
//! let report = compute_diff(&expected, &actual);
//! assert_eq!(report.stats.value_mismatches, 1);
//!
//! // The timestamp is expected to drift; ignore it.
//! let filtered = filter_report(&report, &FilterConfig::new().ignore("ts"));
//! assert!(filtered.is_empty());
//! ```

pub mod diff;
pub mod error;
pub mod filter;
pub mod output;
pub mod parser;
pub mod path;
pub mod tree;

// Re-export commonly used types for convenience
pub use diff::{compute_diff, visit_diffs, Diff, DiffKind, DiffReport, DiffStats};
pub use error::{OutputError, ParseError, VdiffError};
pub use filter::{filter_report, FilterConfig, PathPattern};
pub use output::{format_report, OutputFormat, OutputOptions};
pub use parser::{
    parse_content, parse_file, parse_json, parse_stdin, parse_toml, parse_yaml, FormatHint,
};
pub use path::{format_path, PathSegment};
pub use tree::Value;
