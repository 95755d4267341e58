//! Tests for the Value tree type.

use std::collections::HashMap;
use vdiff::Value;

#[test]
fn kind_names_cover_every_variant() {
    assert_eq!(Value::Null.kind_name(), "null");
    assert_eq!(Value::Bool(false).kind_name(), "boolean");
    assert_eq!(Value::Number(3.5).kind_name(), "number");
    assert_eq!(Value::String("s".into()).kind_name(), "string");
    assert_eq!(Value::Array(vec![]).kind_name(), "array");
    assert_eq!(Value::Object(HashMap::new()).kind_name(), "object");
}

#[test]
fn is_scalar_splits_leaves_from_containers() {
    assert!(Value::Null.is_scalar());
    assert!(Value::Number(1.0).is_scalar());
    assert!(Value::String("x".into()).is_scalar());
    assert!(!Value::Array(vec![]).is_scalar());
    assert!(!Value::Object(HashMap::new()).is_scalar());
}

#[test]
fn scalar_eq_is_kind_strict() {
    // "1" and 1 are different kinds, never equal scalars.
    assert!(!Value::String("1".into()).scalar_eq(&Value::Number(1.0)));
    assert!(!Value::Null.scalar_eq(&Value::Bool(false)));
}

#[test]
fn scalar_eq_tolerates_float_noise() {
    assert!(Value::Number(1.0 / 3.0 * 3.0).scalar_eq(&Value::Number(1.0)));
}

#[test]
fn preview_truncation_respects_char_boundaries() {
    // 3-byte characters put the default cut point mid-character.
    let p = Value::String("★".repeat(40)).preview(80);
    assert!(p.ends_with("..."));
    assert!(p.len() <= 80);

    let p = Value::String("日本語のテキスト".repeat(10)).preview(25);
    assert!(p.ends_with("..."));
    assert!(p.len() <= 25);
}

#[test]
fn preview_shapes() {
    assert_eq!(Value::Null.preview(80), "null");
    assert_eq!(Value::Number(42.0).preview(80), "42");
    assert_eq!(Value::Number(2.5).preview(80), "2.5");
    assert_eq!(Value::String("hi".into()).preview(80), "\"hi\"");
    assert_eq!(Value::Array(vec![]).preview(80), "[]");
    assert_eq!(
        Value::Array(vec![Value::Null, Value::Null]).preview(80),
        "[ 2 items ]"
    );

    let mut map = HashMap::new();
    map.insert("k".to_string(), Value::Null);
    assert_eq!(Value::Object(map).preview(80), "{ 1 key }");
}
