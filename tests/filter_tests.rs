//! Tests for path filtering over diff reports.

use vdiff::{compute_diff, filter_report, parse_json, FilterConfig, PathPattern, PathSegment};

fn report(expected: &str, actual: &str) -> vdiff::DiffReport {
    let e = parse_json(expected).unwrap();
    let a = parse_json(actual).unwrap();
    compute_diff(&e, &a)
}

#[test]
fn no_filters_is_a_passthrough() {
    let r = report(r#"{"a": 1}"#, r#"{"a": 2}"#);
    let filtered = filter_report(&r, &FilterConfig::new());
    assert_eq!(filtered.diffs.len(), r.diffs.len());
    assert_eq!(filtered.stats, r.stats);
}

#[test]
fn ignore_set_drops_every_difference() {
    // Every diff locus is ignored, so the documents count as equivalent.
    let r = report(
        r#"{"a": 1, "b": ["2", "w"], "e": 9, "x": [], "m": {"k": 2}}"#,
        r#"{"a": 3, "b": ["2", "p"], "c": "u", "x": [1], "m": {"k": 2}}"#,
    );
    assert_eq!(r.diffs.len(), 5);

    let filters = FilterConfig::new()
        .ignore("a")
        .ignore("b[1]")
        .ignore("e")
        .ignore("c")
        .ignore("x")
        .ignore("m.k");
    let filtered = filter_report(&r, &filters);
    assert!(filtered.is_empty());
}

#[test]
fn filtering_matches_prefiltered_trees() {
    // Dropping diffs under ignored keys is equivalent to removing those
    // keys from both documents before diffing.
    let full = report(
        r#"{"keep": 1, "noise": {"ts": "a"}, "x": [1, 2]}"#,
        r#"{"keep": 2, "noise": {"ts": "b"}, "x": [1, 3]}"#,
    );
    let filtered = filter_report(&full, &FilterConfig::new().ignore("noise.**").ignore("noise"));

    let pruned = report(
        r#"{"keep": 1, "x": [1, 2]}"#,
        r#"{"keep": 2, "x": [1, 3]}"#,
    );

    assert_eq!(filtered.diffs.len(), pruned.diffs.len());
    for (f, p) in filtered.diffs.iter().zip(&pruned.diffs) {
        assert_eq!(f.kind, p.kind);
        assert_eq!(f.path, p.path);
    }
}

#[test]
fn wildcard_ignores_array_elements() {
    let r = report(r#"{"xs": [1, 2, 3]}"#, r#"{"xs": [9, 9, 9]}"#);
    assert_eq!(r.diffs.len(), 3);

    let filtered = filter_report(&r, &FilterConfig::new().ignore("xs[*]"));
    assert!(filtered.is_empty());
}

#[test]
fn only_restricts_to_matching_paths() {
    let r = report(
        r#"{"a": 1, "b": 2, "c": 3}"#,
        r#"{"a": 9, "b": 9, "c": 9}"#,
    );
    let filtered = filter_report(&r, &FilterConfig::new().only("b"));
    assert_eq!(filtered.diffs.len(), 1);
    assert_eq!(filtered.diffs[0].path_string(), "b");
}

#[test]
fn stats_are_recomputed() {
    let r = report(
        r#"{"a": 1, "gone": 2}"#,
        r#"{"a": 9, "new": 3}"#,
    );
    assert_eq!(r.stats.total(), 3);

    let filtered = filter_report(&r, &FilterConfig::new().ignore("gone").ignore("new"));
    assert_eq!(filtered.stats.total(), 1);
    assert_eq!(filtered.stats.value_mismatches, 1);
    assert_eq!(filtered.stats.missing_keys, 0);
    assert_eq!(filtered.stats.unexpected_keys, 0);
}

#[test]
fn deep_wildcard_matches_through_indices() {
    let pattern = PathPattern::parse("**.id");
    assert!(pattern.matches(&[
        PathSegment::key("users"),
        PathSegment::Index(4),
        PathSegment::key("id"),
    ]));
}
