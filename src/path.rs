//! Typed paths locating a node within a value tree.
//!
//! Paths exist for reporting and filtering only; the diff algorithm never
//! consults them when deciding whether two nodes differ.

use std::fmt;

/// One step from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Descent through an object property.
    Key(String),
    /// Descent into an array element.
    Index(usize),
}

impl PathSegment {
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => write!(f, "{}", name),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Renders a segment list as a dotted path with bracketed indices.
///
/// # Examples
///
/// ```
/// use vdiff::path::{format_path, PathSegment};
///
/// let path = vec![PathSegment::key("b"), PathSegment::Index(1)];
/// assert_eq!(format_path(&path), "b[1]");
///
/// let path = vec![PathSegment::key("m"), PathSegment::key("k")];
/// assert_eq!(format_path(&path), "m.k");
/// ```
pub fn format_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "(root)".to_string();
    }

    use std::fmt::Write;

    let mut out = String::new();
    for segment in path {
        if !out.is_empty() && matches!(segment, PathSegment::Key(_)) {
            out.push('.');
        }
        let _ = write!(out, "{}", segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_display() {
        assert_eq!(PathSegment::key("name").to_string(), "name");
        assert_eq!(PathSegment::Index(3).to_string(), "[3]");
    }

    #[test]
    fn empty_path_is_root() {
        assert_eq!(format_path(&[]), "(root)");
    }

    #[test]
    fn keys_join_with_dots() {
        let path = vec![
            PathSegment::key("user"),
            PathSegment::key("profile"),
            PathSegment::key("age"),
        ];
        assert_eq!(format_path(&path), "user.profile.age");
    }

    #[test]
    fn indices_attach_without_dots() {
        let path = vec![
            PathSegment::key("items"),
            PathSegment::Index(0),
            PathSegment::key("id"),
        ];
        assert_eq!(format_path(&path), "items[0].id");
    }

    #[test]
    fn leading_index() {
        let path = vec![PathSegment::Index(2), PathSegment::key("name")];
        assert_eq!(format_path(&path), "[2].name");
    }
}
