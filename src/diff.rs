//! Core structural diff algorithm.
//!
//! This module compares two value trees node by node and reports every
//! discrepancy as a flat [`Diff`] record anchored at a path. An "expected"
//! tree is compared against an "actual" tree, which gives the diff kinds
//! their direction: a key present only in the expected tree is *missing*,
//! a key present only in the actual tree is *unexpected*.
//!
//! Mismatched kinds, missing keys, extra keys, unequal scalars, and array
//! length differences are all ordinary output, never errors. A kind mismatch
//! or an array length mismatch subsumes everything beneath it, so the
//! traversal does not descend past one.
//!
//! # Examples
//!
//! ```
//! use vdiff::{compute_diff, parse_json, DiffKind};
//!
//! let expected = parse_json(r#"{"a": 1}"#).unwrap();
//! let actual = parse_json(r#"{"a": 2}"#).unwrap();
//!
//! let report = compute_diff(&expected, &actual);
//! assert_eq!(report.stats.value_mismatches, 1);
//! assert_eq!(report.diffs[0].kind, DiffKind::ValueMismatch);
//! assert_eq!(report.diffs[0].path_string(), "a");
//! ```

use crate::path::{format_path, PathSegment};
use crate::tree::Value;
use serde::Serialize;
use std::collections::BTreeSet;
use std::mem;

/// The kind of discrepancy a [`Diff`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// The two nodes have different kinds (e.g. object vs. array).
    TypeMismatch,
    /// Two scalars of the same kind compare unequal.
    ValueMismatch,
    /// A key present in the expected object is absent from the actual one.
    ExpectedKeyMissing,
    /// A key present in the actual object is absent from the expected one.
    UnexpectedKeyPresent,
    /// Two arrays have different element counts.
    ArrayLengthMismatch,
}

/// One reported discrepancy between the two trees.
///
/// `expected` and `actual` hold the nodes at the discrepancy's locus; the
/// side that has no node there (a one-sided key) is `None`. Records are
/// immutable once created and owned by the caller.
#[derive(Debug, Clone)]
pub struct Diff {
    pub kind: DiffKind,
    /// Path from the roots to the locus of the discrepancy.
    pub path: Vec<PathSegment>,
    pub expected: Option<Value>,
    pub actual: Option<Value>,
}

impl Diff {
    /// Renders the locus path, e.g. `"m.k"` or `"b[1]"`.
    pub fn path_string(&self) -> String {
        format_path(&self.path)
    }
}

/// Per-kind counts for a diff report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub type_mismatches: usize,
    pub value_mismatches: usize,
    pub missing_keys: usize,
    pub unexpected_keys: usize,
    pub length_mismatches: usize,
}

impl DiffStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: DiffKind) {
        match kind {
            DiffKind::TypeMismatch => self.type_mismatches += 1,
            DiffKind::ValueMismatch => self.value_mismatches += 1,
            DiffKind::ExpectedKeyMissing => self.missing_keys += 1,
            DiffKind::UnexpectedKeyPresent => self.unexpected_keys += 1,
            DiffKind::ArrayLengthMismatch => self.length_mismatches += 1,
        }
    }

    /// Total number of discrepancies.
    pub fn total(&self) -> usize {
        self.type_mismatches
            + self.value_mismatches
            + self.missing_keys
            + self.unexpected_keys
            + self.length_mismatches
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The complete result of one diff call.
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    pub diffs: Vec<Diff>,
    pub stats: DiffStats,
}

impl DiffReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a report from a diff list, tallying stats.
    pub fn from_diffs(diffs: Vec<Diff>) -> Self {
        let mut stats = DiffStats::new();
        for diff in &diffs {
            stats.record(diff.kind);
        }
        Self { diffs, stats }
    }

    /// Returns true when the two trees were structurally equivalent.
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }
}

/// Computes the structural diff between two value trees.
///
/// The eager form of the algorithm: collects every discrepancy into a
/// [`DiffReport`]. An empty report means the trees are equivalent.
///
/// # Examples
///
/// ```
/// use vdiff::{compute_diff, parse_json};
///
/// let expected = parse_json(r#"{"m": {"k": 2}}"#).unwrap();
/// let actual = parse_json(r#"{"m": {"k": 2}}"#).unwrap();
/// assert!(compute_diff(&expected, &actual).is_empty());
/// ```
pub fn compute_diff(expected: &Value, actual: &Value) -> DiffReport {
    let mut diffs = Vec::new();
    visit_diffs(expected, actual, |diff| diffs.push(diff));
    DiffReport::from_diffs(diffs)
}

/// Streams discrepancies between two value trees to a sink.
///
/// The streaming form of the algorithm; [`compute_diff`] is this with a
/// `Vec` sink. Both forms produce the same multiset of records.
///
/// Traversal is iterative over an explicit work stack, so input depth is
/// bounded by heap rather than the native call stack. Ordering guarantees:
/// element diffs of an array surface in ascending index order, and the
/// diffs from each shared object key are contiguous and identical to what
/// an isolated call on that key's subtrees would produce. Within one
/// object, the one-sided-key records surface before the shared-key
/// recursion; callers should not rely on that relative order.
pub fn visit_diffs<F>(expected: &Value, actual: &Value, mut found: F)
where
    F: FnMut(Diff),
{
    let mut stack: Vec<(Vec<PathSegment>, &Value, &Value)> =
        vec![(Vec::new(), expected, actual)];

    while let Some((path, exp, act)) = stack.pop() {
        if mem::discriminant(exp) != mem::discriminant(act) {
            // A kind mismatch subsumes every difference beneath it.
            found(Diff {
                kind: DiffKind::TypeMismatch,
                path,
                expected: Some(exp.clone()),
                actual: Some(act.clone()),
            });
            continue;
        }

        match (exp, act) {
            (Value::Object(exp_map), Value::Object(act_map)) => {
                let exp_keys: BTreeSet<&str> = exp_map.keys().map(String::as_str).collect();
                let act_keys: BTreeSet<&str> = act_map.keys().map(String::as_str).collect();

                for key in exp_keys.difference(&act_keys) {
                    let mut locus = path.clone();
                    locus.push(PathSegment::key(*key));
                    found(Diff {
                        kind: DiffKind::ExpectedKeyMissing,
                        path: locus,
                        expected: Some(exp_map[*key].clone()),
                        actual: None,
                    });
                }

                for key in act_keys.difference(&exp_keys) {
                    let mut locus = path.clone();
                    locus.push(PathSegment::key(*key));
                    found(Diff {
                        kind: DiffKind::UnexpectedKeyPresent,
                        path: locus,
                        expected: None,
                        actual: Some(act_map[*key].clone()),
                    });
                }

                // Pushed in reverse so the first key in sort order pops first
                // and each key's subtree is finished before the next starts.
                let shared: Vec<&str> = exp_keys.intersection(&act_keys).copied().collect();
                for key in shared.into_iter().rev() {
                    let mut locus = path.clone();
                    locus.push(PathSegment::key(key));
                    stack.push((locus, &exp_map[key], &act_map[key]));
                }
            }
            (Value::Array(exp_arr), Value::Array(act_arr)) => {
                if exp_arr.len() != act_arr.len() {
                    // Length mismatch subsumes element differences.
                    found(Diff {
                        kind: DiffKind::ArrayLengthMismatch,
                        path,
                        expected: Some(exp.clone()),
                        actual: Some(act.clone()),
                    });
                } else {
                    for (i, (e, a)) in exp_arr.iter().zip(act_arr.iter()).enumerate().rev() {
                        let mut locus = path.clone();
                        locus.push(PathSegment::Index(i));
                        stack.push((locus, e, a));
                    }
                }
            }
            _ => {
                // Same discriminant and neither container arm matched.
                debug_assert!(exp.is_scalar() && act.is_scalar());
                if !exp.scalar_eq(act) {
                    found(Diff {
                        kind: DiffKind::ValueMismatch,
                        path,
                        expected: Some(exp.clone()),
                        actual: Some(act.clone()),
                    });
                }
            }
        }
    }
}
