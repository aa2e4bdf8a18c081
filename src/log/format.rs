//! Text and JSON rendering of arbitrary serializable values.
//!
//! Values are first lowered to a [`serde_json::Value`], so any type that
//! implements [`Serialize`] can be dumped field by field without knowing
//! its concrete shape.

use crate::error::{Result, SbomUtilityError};
use serde::Serialize;
use serde_json::{Map, Value};

/// Render a struct as an aligned block, one line per field.
///
/// ```text
///   Flags (Flags) = {
///          trace (bool)     : false
///     input_file (string)   : bom.json
///   }
/// ```
///
/// Fails when `value` does not serialize to a JSON object.
pub fn format_struct<T: Serialize + ?Sized>(struct_name: &str, value: &T) -> Result<String> {
    let lowered = serde_json::to_value(value)
        .map_err(|e| SbomUtilityError::format(format!("unable to serialize `{struct_name}`: {e}")))?;

    let Value::Object(fields) = lowered else {
        return Err(SbomUtilityError::format(format!(
            "invalid `Struct`; actual type: ({})",
            value_kind(&lowered)
        )));
    };

    let mut out = format!("  {struct_name} ({}) = {{\n", short_type_name::<T>());

    if fields.is_empty() {
        out.push_str("\t<empty>\n");
    } else {
        for (name, field) in &fields {
            let kind = format!("({})", value_kind(field));
            out.push_str(&format!("\t{name:>12} {kind:<10} : {}\n", display_value(field)));
        }
    }
    out.push_str("  }\n");

    Ok(out)
}

/// Render a map as `[key]: value` entries separated by `, `.
///
/// Fails when `value` does not serialize to a JSON object.
pub fn format_map<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let lowered = serde_json::to_value(value)
        .map_err(|e| SbomUtilityError::format(format!("unable to serialize map: {e}")))?;

    match lowered {
        Value::Object(entries) => Ok(join_entries(&entries)),
        other => Err(SbomUtilityError::format(format!(
            "invalid `Map`; actual type: ({})",
            value_kind(&other)
        ))),
    }
}

/// Compact JSON; an empty string when the value cannot be serialized.
#[must_use]
pub fn format_as_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Indented JSON.
pub fn format_as_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        SbomUtilityError::format(format!(
            "unable to marshal data of type ({}): {e}",
            short_type_name::<T>()
        ))
    })
}

/// Indented JSON prefixed with a label, e.g. `config: { ... }`.
#[must_use]
pub fn format_named_json<T: Serialize + ?Sized>(name: &str, value: &T) -> String {
    let body = serde_json::to_string_pretty(value).unwrap_or_default();
    format!("{name}: {body}")
}

/// JSON kind name of a value, as shown in struct dumps.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn join_entries(entries: &Map<String, Value>) -> String {
    entries
        .iter()
        .map(|(k, v)| format!("[{k}]: {}", display_value(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Type name with every path shortened to its last segment, including
/// those inside generic arguments.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (i, c) in full.char_indices() {
        if !(c.is_alphanumeric() || c == '_' || c == ':') {
            short.push_str(last_segment(&full[segment_start..i]));
            short.push(c);
            segment_start = i + c.len_utf8();
        }
    }
    short.push_str(last_segment(&full[segment_start..]));
    short
}

fn last_segment(path: &str) -> &str {
    path.rfind("::").map_or(path, |i| &path[i + 2..])
}
