//! JSON to simulated Clarity value parsing
//!
//! This module converts JSON fixtures into the value space the harness
//! simulates. It handles:
//! - Typed values via annotation: `{"type": "uint", "value": 10}`
//! - JSON objects → tuples (records)
//! - Primitive types (integers, strings, booleans)
//! - Result envelopes: `{"success": true, "value": {...}}`
//!
//! ## Supported Type Annotations
//!
//! | Type        | Example                                       |
//! |-------------|-----------------------------------------------|
//! | `uint`      | `{"type": "uint", "value": 42}`               |
//! | `int`       | `{"type": "int", "value": -5}`                |
//! | `bool`      | `{"type": "bool", "value": true}`             |
//! | `principal` | `{"type": "principal", "value": "ST2CY..."}`  |
//! | `ascii`     | `{"type": "ascii", "value": "hello"}`         |
//! | `tuple`     | `{"type": "tuple", "value": {"a": 1}}`        |
//!
//! Bare values (without type annotation) still work:
//! - Non-negative integers → `uint`, negative → `int`
//! - Strings that look like Stacks addresses → `principal`, else `ascii`
//! - Booleans → `bool`
//! - Objects → `tuple`

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Alphabet used by c32-encoded Stacks addresses. Excludes I, L, O and U.
const C32_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Errors that can occur while parsing fixture values
#[derive(Debug, Error)]
pub enum ValueParseError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Unsupported type: {0}. Supported types: uint, int, bool, principal, ascii, tuple")]
    UnsupportedType(String),

    #[error("Type/value mismatch: expected {expected} but got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Empty arguments")]
    EmptyArguments,
}

impl From<serde_json::Error> for ValueParseError {
    fn from(err: serde_json::Error) -> Self {
        ValueParseError::JsonError(err.to_string())
    }
}

/// A simulated Clarity value as it appears in call fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Uint(u128),
    Int(i128),
    Bool(bool),
    Principal(String),
    Ascii(String),
    Tuple(BTreeMap<String, Value>),
}

impl Value {
    /// Parse a JSON value into a simulated Clarity value.
    ///
    /// Objects carrying a `type`/`value` annotation pair are parsed as the
    /// annotated type; any other object becomes a tuple.
    pub fn from_json(json: &JsonValue) -> Result<Self, ValueParseError> {
        match json {
            JsonValue::Bool(b) => Ok(Value::Bool(*b)),
            JsonValue::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Value::Uint(u as u128))
                } else if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i as i128))
                } else {
                    Err(ValueParseError::UnsupportedType(format!(
                        "non-integer number {n}"
                    )))
                }
            }
            JsonValue::String(s) => {
                if looks_like_principal(s) {
                    Ok(Value::Principal(s.clone()))
                } else if s.is_ascii() {
                    Ok(Value::Ascii(s.clone()))
                } else {
                    Err(ValueParseError::InvalidValue(format!(
                        "string is not ASCII: {s}"
                    )))
                }
            }
            JsonValue::Object(map) => {
                if let Some((type_name, inner)) = as_typed_annotation(map) {
                    debug!("Parsing type-annotated value");
                    return parse_typed_value(type_name, inner);
                }
                let mut tuple = BTreeMap::new();
                for (key, value) in map {
                    tuple.insert(key.clone(), Value::from_json(value)?);
                }
                Ok(Value::Tuple(tuple))
            }
            JsonValue::Array(_) => Err(ValueParseError::UnsupportedType("list".to_string())),
            JsonValue::Null => Err(ValueParseError::InvalidValue(
                "null is only valid as a whole return value".to_string(),
            )),
        }
    }

    /// Render the value back to the JSON shape it was parsed from.
    pub fn to_json(&self) -> JsonValue {
        match self {
            // Values beyond 64 bits render as digit strings, the same
            // shape the parser accepts them in.
            Value::Uint(u) => match u64::try_from(*u) {
                Ok(small) => serde_json::json!(small),
                Err(_) => JsonValue::String(u.to_string()),
            },
            Value::Int(i) => match i64::try_from(*i) {
                Ok(small) => serde_json::json!(small),
                Err(_) => JsonValue::String(i.to_string()),
            },
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Principal(p) => JsonValue::String(p.clone()),
            Value::Ascii(s) => JsonValue::String(s.clone()),
            Value::Tuple(map) => {
                let entries = map
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<serde_json::Map<_, _>>();
                JsonValue::Object(entries)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint(u) => write!(f, "u{u}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Principal(p) => write!(f, "'{p}"),
            Value::Ascii(s) => write!(f, "\"{s}\""),
            Value::Tuple(map) => {
                write!(f, "(tuple")?;
                for (key, value) in map {
                    write!(f, " ({key} {value})")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// The ad hoc result envelope the fixtures assert on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub success: bool,
    pub error: Option<u32>,
    pub value: Option<Value>,
}

/// What a configured stub yields when a call resolves against it.
///
/// `Undefined` is the JS `undefined` of the original fixtures: the return
/// of an unconfigured stub or a missing-record lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnValue {
    Response(Response),
    Value(Value),
    Undefined,
}

impl ReturnValue {
    /// A bare success envelope: `{"success": true}`.
    pub fn ok() -> Self {
        ReturnValue::Response(Response {
            success: true,
            error: None,
            value: None,
        })
    }

    /// A success envelope carrying a value.
    pub fn ok_with(value: Value) -> Self {
        ReturnValue::Response(Response {
            success: true,
            error: None,
            value: Some(value),
        })
    }

    /// A failure envelope with an error code.
    pub fn err(code: u32) -> Self {
        ReturnValue::Response(Response {
            success: false,
            error: Some(code),
            value: None,
        })
    }

    /// A failure envelope without an error code.
    pub fn err_bare() -> Self {
        ReturnValue::Response(Response {
            success: false,
            error: None,
            value: None,
        })
    }

    /// A raw (non-envelope) return value.
    pub fn value(value: Value) -> Self {
        ReturnValue::Value(value)
    }

    /// Parse a JSON payload into a return value.
    ///
    /// `null` parses to `Undefined`. Objects with a boolean `success` field
    /// parse to an envelope; everything else is a raw value.
    pub fn from_json(json: &JsonValue) -> Result<Self, ValueParseError> {
        match json {
            JsonValue::Null => Ok(ReturnValue::Undefined),
            JsonValue::Object(map) if map.contains_key("success") => {
                let success = match map.get("success") {
                    Some(JsonValue::Bool(b)) => *b,
                    other => {
                        return Err(ValueParseError::TypeMismatch {
                            expected: "bool".to_string(),
                            actual: other
                                .map(|v| v.to_string())
                                .unwrap_or_else(|| "missing".to_string()),
                        })
                    }
                };
                for key in map.keys() {
                    if key != "success" && key != "error" && key != "value" {
                        return Err(ValueParseError::InvalidValue(format!(
                            "unexpected envelope field '{key}'"
                        )));
                    }
                }
                let error = match map.get("error") {
                    None | Some(JsonValue::Null) => None,
                    Some(JsonValue::Number(n)) => {
                        let code = n.as_u64().and_then(|u| u32::try_from(u).ok()).ok_or_else(
                            || ValueParseError::InvalidValue(format!("invalid error code {n}")),
                        )?;
                        Some(code)
                    }
                    Some(other) => {
                        return Err(ValueParseError::TypeMismatch {
                            expected: "u32 error code".to_string(),
                            actual: other.to_string(),
                        })
                    }
                };
                let value = match map.get("value") {
                    None | Some(JsonValue::Null) => None,
                    Some(inner) => Some(Value::from_json(inner)?),
                };
                Ok(ReturnValue::Response(Response {
                    success,
                    error,
                    value,
                }))
            }
            other => Ok(ReturnValue::Value(Value::from_json(other)?)),
        }
    }

    /// Parse a JSON string into a return value.
    pub fn from_json_str(json_str: &str) -> Result<Self, ValueParseError> {
        let json: JsonValue = serde_json::from_str(json_str)?;
        Self::from_json(&json)
    }

    /// Render the return value back to JSON for traces and exports.
    pub fn to_json(&self) -> JsonValue {
        match self {
            ReturnValue::Undefined => JsonValue::Null,
            ReturnValue::Value(v) => v.to_json(),
            ReturnValue::Response(r) => {
                let mut map = serde_json::Map::new();
                map.insert("success".to_string(), JsonValue::Bool(r.success));
                if let Some(code) = r.error {
                    map.insert("error".to_string(), serde_json::json!(code));
                }
                if let Some(value) = &r.value {
                    map.insert("value".to_string(), value.to_json());
                }
                JsonValue::Object(map)
            }
        }
    }

    /// The envelope, when this return value is one.
    pub fn as_response(&self) -> Option<&Response> {
        match self {
            ReturnValue::Response(r) => Some(r),
            _ => None,
        }
    }

    /// The envelope success flag, when present.
    pub fn success_flag(&self) -> Option<bool> {
        self.as_response().map(|r| r.success)
    }

    /// The envelope error code, when present.
    pub fn error_code(&self) -> Option<u32> {
        self.as_response().and_then(|r| r.error)
    }
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnValue::Undefined => write!(f, "none"),
            ReturnValue::Value(v) => write!(f, "{v}"),
            ReturnValue::Response(r) => match (r.success, &r.value, r.error) {
                (true, Some(v), _) => write!(f, "(ok {v})"),
                (true, None, _) => write!(f, "(ok true)"),
                (false, _, Some(code)) => write!(f, "(err u{code})"),
                (false, _, None) => write!(f, "(err none)"),
            },
        }
    }
}

/// Parse a JSON string into positional call arguments.
///
/// A JSON array yields one argument per element; a single bare value
/// yields one argument.
pub fn parse_args(json_str: &str) -> Result<Vec<Value>, ValueParseError> {
    if json_str.trim().is_empty() {
        return Err(ValueParseError::EmptyArguments);
    }
    let json: JsonValue = serde_json::from_str(json_str)?;
    match &json {
        JsonValue::Array(elements) => {
            debug!("Parsing argument array with {} elements", elements.len());
            elements
                .iter()
                .enumerate()
                .map(|(i, element)| {
                    Value::from_json(element).map_err(|e| {
                        ValueParseError::InvalidValue(format!("array element {i}: {e}"))
                    })
                })
                .collect()
        }
        other => Ok(vec![Value::from_json(other)?]),
    }
}

/// Heuristic check for bare strings that should parse as principals.
pub fn looks_like_principal(s: &str) -> bool {
    let address = s.split('.').next().unwrap_or(s);
    if !address.starts_with('S') || address.len() < 38 {
        return false;
    }
    address.chars().all(|c| C32_ALPHABET.contains(c))
}

/// Strict principal validation for annotated values.
pub fn is_valid_principal(s: &str) -> bool {
    let mut parts = s.splitn(2, '.');
    let address = match parts.next() {
        Some(a) => a,
        None => return false,
    };
    if !looks_like_principal(address) || address.len() > 41 {
        return false;
    }
    match parts.next() {
        None => true,
        // Contract principals carry a kebab-case contract name suffix.
        Some(name) => {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }
    }
}

fn as_typed_annotation(
    map: &serde_json::Map<String, JsonValue>,
) -> Option<(&str, &JsonValue)> {
    if map.len() != 2 {
        return None;
    }
    let type_name = map.get("type")?.as_str()?;
    let inner = map.get("value")?;
    Some((type_name, inner))
}

fn parse_typed_value(type_name: &str, inner: &JsonValue) -> Result<Value, ValueParseError> {
    match type_name {
        "uint" => parse_uint(inner),
        "int" => parse_int(inner),
        "bool" => match inner {
            JsonValue::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(ValueParseError::TypeMismatch {
                expected: "bool".to_string(),
                actual: other.to_string(),
            }),
        },
        "principal" => match inner {
            JsonValue::String(s) if is_valid_principal(s) => Ok(Value::Principal(s.clone())),
            JsonValue::String(s) => Err(ValueParseError::InvalidValue(format!(
                "invalid principal: {s}"
            ))),
            other => Err(ValueParseError::TypeMismatch {
                expected: "principal string".to_string(),
                actual: other.to_string(),
            }),
        },
        "ascii" => match inner {
            JsonValue::String(s) if s.is_ascii() => Ok(Value::Ascii(s.clone())),
            JsonValue::String(s) => Err(ValueParseError::InvalidValue(format!(
                "string is not ASCII: {s}"
            ))),
            other => Err(ValueParseError::TypeMismatch {
                expected: "ascii string".to_string(),
                actual: other.to_string(),
            }),
        },
        "tuple" => match inner {
            JsonValue::Object(_) => Value::from_json(inner),
            other => Err(ValueParseError::TypeMismatch {
                expected: "tuple object".to_string(),
                actual: other.to_string(),
            }),
        },
        other => Err(ValueParseError::UnsupportedType(other.to_string())),
    }
}

fn parse_uint(inner: &JsonValue) -> Result<Value, ValueParseError> {
    match inner {
        JsonValue::Number(n) => n
            .as_u64()
            .map(|u| Value::Uint(u as u128))
            .ok_or_else(|| ValueParseError::TypeMismatch {
                expected: "uint".to_string(),
                actual: n.to_string(),
            }),
        // Large amounts are passed as digit strings.
        JsonValue::String(s) => s
            .parse::<u128>()
            .map(Value::Uint)
            .map_err(|_| ValueParseError::InvalidValue(format!("invalid uint: {s}"))),
        other => Err(ValueParseError::TypeMismatch {
            expected: "uint".to_string(),
            actual: other.to_string(),
        }),
    }
}

fn parse_int(inner: &JsonValue) -> Result<Value, ValueParseError> {
    match inner {
        JsonValue::Number(n) => n
            .as_i64()
            .map(|i| Value::Int(i as i128))
            .ok_or_else(|| ValueParseError::TypeMismatch {
                expected: "int".to_string(),
                actual: n.to_string(),
            }),
        JsonValue::String(s) => s
            .parse::<i128>()
            .map(Value::Int)
            .map_err(|_| ValueParseError::InvalidValue(format!("invalid int: {s}"))),
        other => Err(ValueParseError::TypeMismatch {
            expected: "int".to_string(),
            actual: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PROSUMER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

    #[test]
    fn parses_bare_argument_array() {
        let args = parse_args(&format!("[\"{PROSUMER}\", 100, true]")).unwrap();
        assert_eq!(
            args,
            vec![
                Value::Principal(PROSUMER.to_string()),
                Value::Uint(100),
                Value::Bool(true),
            ]
        );
    }

    #[test]
    fn negative_numbers_parse_as_int() {
        let args = parse_args("[-5]").unwrap();
        assert_eq!(args, vec![Value::Int(-5)]);
    }

    #[test]
    fn typed_annotation_forces_representation() {
        let value = Value::from_json(&json!({"type": "int", "value": 42})).unwrap();
        assert_eq!(value, Value::Int(42));
    }

    #[test]
    fn plain_object_parses_as_tuple() {
        let value = Value::from_json(&json!({"produced": 100, "consumed": 80})).unwrap();
        match value {
            Value::Tuple(map) => {
                assert_eq!(map.get("produced"), Some(&Value::Uint(100)));
                assert_eq!(map.get("consumed"), Some(&Value::Uint(80)));
            }
            other => panic!("expected tuple, got {other:?}"),
        }
    }

    #[test]
    fn envelope_parses_from_success_object() {
        let rv =
            ReturnValue::from_json(&json!({"success": true, "value": {"surplus": 20}})).unwrap();
        assert_eq!(rv.success_flag(), Some(true));
        assert!(rv.error_code().is_none());
    }

    #[test]
    fn envelope_error_code_is_preserved() {
        let rv = ReturnValue::from_json_str(r#"{"success": false, "error": 403}"#).unwrap();
        assert_eq!(rv.success_flag(), Some(false));
        assert_eq!(rv.error_code(), Some(403));
    }

    #[test]
    fn null_parses_as_undefined() {
        let rv = ReturnValue::from_json_str("null").unwrap();
        assert_eq!(rv, ReturnValue::Undefined);
    }

    #[test]
    fn raw_number_is_not_an_envelope() {
        let rv = ReturnValue::from_json_str("150").unwrap();
        assert_eq!(rv, ReturnValue::Value(Value::Uint(150)));
        assert!(rv.as_response().is_none());
    }

    #[test]
    fn envelope_rejects_unknown_fields() {
        let result = ReturnValue::from_json(&json!({"success": true, "extra": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn display_renders_clarity_style() {
        assert_eq!(ReturnValue::ok().to_string(), "(ok true)");
        assert_eq!(ReturnValue::err(404).to_string(), "(err u404)");
        assert_eq!(ReturnValue::err_bare().to_string(), "(err none)");
        assert_eq!(ReturnValue::Undefined.to_string(), "none");
        assert_eq!(Value::Uint(120).to_string(), "u120");
    }

    #[test]
    fn principal_heuristic_accepts_fixture_addresses() {
        assert!(looks_like_principal(PROSUMER));
        assert!(looks_like_principal(
            "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"
        ));
        assert!(!looks_like_principal("hello"));
        assert!(!looks_like_principal("STSHORT"));
    }

    #[test]
    fn contract_principal_validates_suffix() {
        assert!(is_valid_principal(&format!("{PROSUMER}.energy-trading")));
        assert!(!is_valid_principal(&format!("{PROSUMER}.Bad_Name")));
    }

    #[test]
    fn float_arguments_are_rejected() {
        assert!(parse_args("[1.5]").is_err());
    }

    #[test]
    fn empty_arguments_are_rejected() {
        assert!(matches!(
            parse_args("  "),
            Err(ValueParseError::EmptyArguments)
        ));
    }

    #[test]
    fn return_value_json_round_trips() {
        let rv = ReturnValue::from_json_str(
            r#"{"success": true, "value": {"deficit": 10, "payment": 1000}}"#,
        )
        .unwrap();
        let rendered = rv.to_json();
        assert_eq!(ReturnValue::from_json(&rendered).unwrap(), rv);
    }
}
