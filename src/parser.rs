//! Parsing JSON, YAML, and TOML text into the [`Value`] tree.
//!
//! Files are dispatched on extension; content without a useful extension is
//! tried as JSON first and YAML second (YAML accepts nearly any scalar, so
//! TOML is only selected explicitly, never by sniffing).
//!
//! # Examples
//!
//! ```no_run
//! use vdiff::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let expected = parse_file(Path::new("expected.json"))?;
//! let actual = parse_file(Path::new("actual.yaml"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::tree::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Which syntax to parse input as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    /// Try JSON, then YAML.
    Auto,
    Json,
    Yaml,
    Toml,
}

impl FormatHint {
    fn from_extension(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase());
        match ext.as_deref() {
            Some("json") => FormatHint::Json,
            Some("yaml") | Some("yml") => FormatHint::Yaml,
            Some("toml") => FormatHint::Toml,
            _ => FormatHint::Auto,
        }
    }
}

/// Parses a file into a [`Value`] tree.
///
/// The format is chosen by extension (`.json`, `.yaml`/`.yml`, `.toml`);
/// anything else falls back to sniffing via [`FormatHint::Auto`].
///
/// # Errors
///
/// Returns [`ParseError::FileNotFound`] for a missing file,
/// [`ParseError::ReadError`] when the file cannot be read, the
/// format-specific variant for malformed content, and
/// [`ParseError::UnknownFormat`] when sniffing fails.
pub fn parse_file(path: &Path) -> Result<Value, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(path.to_string_lossy()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy(), e))?;

    parse_labeled(&content, FormatHint::from_extension(path), &path.to_string_lossy())
}

/// Parses a string with an explicit (or `Auto`) format hint.
pub fn parse_content(content: &str, hint: FormatHint) -> Result<Value, ParseError> {
    parse_labeled(content, hint, "<input>")
}

/// Reads standard input to end and parses it.
pub fn parse_stdin(hint: FormatHint) -> Result<Value, ParseError> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| ParseError::read_error("<stdin>", e))?;
    parse_labeled(&content, hint, "<stdin>")
}

fn parse_labeled(content: &str, hint: FormatHint, origin: &str) -> Result<Value, ParseError> {
    match hint {
        FormatHint::Json => parse_json(content).map_err(|e| ParseError::json_error(origin, e)),
        FormatHint::Yaml => parse_yaml(content).map_err(|e| ParseError::yaml_error(origin, e)),
        FormatHint::Toml => parse_toml(content).map_err(|e| ParseError::toml_error(origin, e)),
        FormatHint::Auto => parse_json(content)
            .map_err(|_| ())
            .or_else(|_| parse_yaml(content).map_err(|_| ()))
            .map_err(|_| ParseError::unknown_format(origin)),
    }
}

/// Parses a JSON string into a [`Value`].
///
/// # Examples
///
/// ```
/// use vdiff::parser::parse_json;
///
/// let value = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
/// ```
pub fn parse_json(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_value(value))
}

/// Parses a YAML string into a [`Value`].
pub fn parse_yaml(content: &str) -> Result<Value, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_value(value))
}

/// Parses a TOML string into a [`Value`].
///
/// Datetimes have no tree representation of their own and become strings,
/// compared through ordinary string equality.
pub fn parse_toml(content: &str) -> Result<Value, toml::de::Error> {
    let value: toml::Value = toml::from_str(content)?;
    Ok(toml_to_value(value))
}

fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(obj) => {
            let map: HashMap<String, Value> =
                obj.into_iter().map(|(k, v)| (k, json_to_value(v))).collect();
            Value::Object(map)
        }
    }
}

/// YAML-specific shapes (anchors, tags, non-string keys) are normalized
/// away: tags are unwrapped and keys are stringified.
fn yaml_to_value(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_value).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let map: HashMap<String, Value> = map
                .into_iter()
                .map(|(k, v)| {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        serde_yaml::Value::Null => "null".to_string(),
                        other => format!("{:?}", other),
                    };
                    (key, yaml_to_value(v))
                })
                .collect();
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value),
    }
}

fn toml_to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i as f64),
        toml::Value::Float(f) => Value::Number(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_value).collect()),
        toml::Value::Table(table) => {
            let map: HashMap<String, Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_value(v)))
                .collect();
            Value::Object(map)
        }
    }
}
