use serde_json::Value;

/// How a CSV cell was read: as a JSON document or as a plain identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Structured(Value),
    Plain(String),
}

/// Read a trimmed cell as JSON, falling back to the raw text.
///
/// A cell holding the JSON literal `null` is treated as plain text: there is no
/// document to look a key up in.
pub fn interpret_cell(cell: &str) -> ParseOutcome {
    match serde_json::from_str::<Value>(cell) {
        Ok(Value::Null) | Err(_) => ParseOutcome::Plain(cell.to_string()),
        Ok(value) => ParseOutcome::Structured(value),
    }
}

/// Identifier stored under `key`, if the value is truthy and non-blank.
///
/// Objects are looked up by name. Arrays are indexed when `key` is a canonical
/// decimal index such as `0` or `12` (not `01`).
pub fn extract_identifier(document: &Value, key: &str) -> Option<String> {
    let value = lookup(document, key)?;
    if !is_truthy(value) {
        return None;
    }
    let identifier = display_value(value).trim().to_string();
    if identifier.is_empty() {
        None
    } else {
        Some(identifier)
    }
}

fn lookup<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    match document {
        Value::Object(map) => map.get(key),
        Value::Array(items) => {
            let index: usize = key.parse().ok()?;
            if index.to_string() != key {
                return None;
            }
            items.get(index)
        }
        _ => None,
    }
}

/// `null`, `false`, zero and the empty string are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose string form of a JSON value, as a user would see it in a report.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
