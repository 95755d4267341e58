//! Path filtering for diff reports.
//!
//! Selective equality is built on top of the differ: compute the full
//! report, then drop the records whose locus the caller considers
//! irrelevant. Patterns use the same syntax the path renderer produces,
//! plus wildcards.
//!
//! # Pattern Syntax
//!
//! - `foo` - matches the object key "foo"
//! - `[2]` - matches array index 2
//! - `[*]` - matches any array index
//! - `*` - matches any single object key
//! - `**` - matches any run of segments (including none)
//! - `b[1]`, `m.k`, `users[*].name` - combinations of the above
//!
//! # Examples
//!
//! ```
//! use vdiff::filter::PathPattern;
//! use vdiff::path::PathSegment;
//!
//! let pattern = PathPattern::parse("b[1]");
//! assert!(pattern.matches(&[PathSegment::key("b"), PathSegment::Index(1)]));
//!
//! let pattern = PathPattern::parse("**.version");
//! assert!(pattern.matches(&[PathSegment::key("pkg"), PathSegment::key("version")]));
//! ```

use crate::diff::{Diff, DiffReport};
use crate::path::PathSegment;

/// A single matcher in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Matches one object key exactly.
    Key(String),
    /// Matches one array index exactly.
    Index(usize),
    /// Matches any single object key (`*`).
    AnyKey,
    /// Matches any single array index (`[*]`).
    AnyIndex,
    /// Matches any run of segments, including an empty one (`**`).
    AnySubtree,
}

/// A compiled pattern matched against diff loci.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pub segments: Vec<PatternSegment>,
}

impl PathPattern {
    /// Compiles a pattern string.
    ///
    /// Parsing never fails; a bracket group that is neither a number nor
    /// `*` is kept as part of a literal key.
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        for chunk in pattern.split('.') {
            parse_chunk(chunk, &mut segments);
        }
        Self { segments }
    }

    pub fn matches(&self, path: &[PathSegment]) -> bool {
        matches_from(&self.segments, path)
    }
}

/// Splits one dot-separated chunk like `b[1][0]` into its segments.
fn parse_chunk(chunk: &str, out: &mut Vec<PatternSegment>) {
    let (name, mut rest) = match chunk.find('[') {
        Some(pos) => (&chunk[..pos], &chunk[pos..]),
        None => (chunk, ""),
    };

    // Bracket groups must all be well-formed or the chunk is one literal key.
    let mut brackets = Vec::new();
    let mut scan = rest;
    while !scan.is_empty() {
        let valid = scan.strip_prefix('[').and_then(|tail| {
            let end = tail.find(']')?;
            let body = &tail[..end];
            let segment = if body == "*" {
                PatternSegment::AnyIndex
            } else {
                PatternSegment::Index(body.parse().ok()?)
            };
            Some((segment, &tail[end + 1..]))
        });
        match valid {
            Some((segment, tail)) => {
                brackets.push(segment);
                scan = tail;
            }
            None => {
                brackets.clear();
                rest = "";
                break;
            }
        }
    }
    let literal = if rest.is_empty() { chunk } else { name };

    match literal {
        "" => {}
        "**" => out.push(PatternSegment::AnySubtree),
        "*" => out.push(PatternSegment::AnyKey),
        _ => out.push(PatternSegment::Key(literal.to_string())),
    }
    out.extend(brackets);
}

fn matches_from(pattern: &[PatternSegment], path: &[PathSegment]) -> bool {
    match (pattern.first(), path.first()) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(_), None) => pattern
            .iter()
            .all(|s| matches!(s, PatternSegment::AnySubtree)),
        (Some(seg), Some(step)) => match seg {
            PatternSegment::Key(name) => {
                matches!(step, PathSegment::Key(k) if k == name)
                    && matches_from(&pattern[1..], &path[1..])
            }
            PatternSegment::Index(i) => {
                matches!(step, PathSegment::Index(j) if j == i)
                    && matches_from(&pattern[1..], &path[1..])
            }
            PatternSegment::AnyKey => {
                matches!(step, PathSegment::Key(_)) && matches_from(&pattern[1..], &path[1..])
            }
            PatternSegment::AnyIndex => {
                matches!(step, PathSegment::Index(_)) && matches_from(&pattern[1..], &path[1..])
            }
            PatternSegment::AnySubtree => {
                matches_from(&pattern[1..], path) || matches_from(pattern, &path[1..])
            }
        },
    }
}

/// Which diffs to keep from a report.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Loci to drop.
    pub ignore_patterns: Vec<PathPattern>,
    /// If non-empty, only loci matching one of these are kept.
    pub only_patterns: Vec<PathPattern>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(mut self, pattern: &str) -> Self {
        self.ignore_patterns.push(PathPattern::parse(pattern));
        self
    }

    pub fn only(mut self, pattern: &str) -> Self {
        self.only_patterns.push(PathPattern::parse(pattern));
        self
    }

    pub fn has_filters(&self) -> bool {
        !self.ignore_patterns.is_empty() || !self.only_patterns.is_empty()
    }

    pub fn should_include(&self, path: &[PathSegment]) -> bool {
        if self.ignore_patterns.iter().any(|p| p.matches(path)) {
            return false;
        }
        if !self.only_patterns.is_empty() {
            return self.only_patterns.iter().any(|p| p.matches(path));
        }
        true
    }
}

/// Drops filtered-out diffs from a report, recomputing its stats.
pub fn filter_report(report: &DiffReport, config: &FilterConfig) -> DiffReport {
    if !config.has_filters() {
        return report.clone();
    }

    let kept: Vec<Diff> = report
        .diffs
        .iter()
        .filter(|diff| config.should_include(&diff.path))
        .cloned()
        .collect();

    DiffReport::from_diffs(kept)
}
