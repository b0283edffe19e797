//! Structural schema descriptors for strict JSON decoding.
//!
//! serde alone reports *that* a field is missing but not *where*, so each
//! decodable record declares its shape as a const [`Shape`] tree. The tree is
//! walked against the parsed `serde_json::Value` before the typed decode,
//! which lets a mismatch name the exact field path
//! (e.g. `strategy.actions[1].owner`).

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ExtractError, ExtractResult};
use super::types::{DualTextRecord, EngagementRole, SituationType, StrategyRecord};

/// Expected shape of a JSON value.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// A JSON string
    Text,
    /// A JSON boolean
    Flag,
    /// A JSON string restricted to the listed values
    OneOf(&'static [&'static str]),
    /// A JSON object with these required fields
    Record(&'static [(&'static str, Shape)]),
    /// A JSON array whose items all have this shape
    List(&'static Shape),
}

/// A record type that can be decoded from a model response.
pub trait Schema: DeserializeOwned {
    /// Human-readable schema name for logs and reports.
    const NAME: &'static str;
    /// Required structure of the JSON document.
    const SHAPE: Shape;
}

const DECISION_MAKER: Shape = Shape::Record(&[
    ("name", Shape::Text),
    ("title", Shape::Text),
    ("caresAbout", Shape::Text),
]);

const INFLUENCER: Shape = Shape::Record(&[
    ("name", Shape::Text),
    ("title", Shape::Text),
    ("attitude", Shape::Text),
    ("isAlly", Shape::Flag),
]);

const ACTION_ITEM: Shape = Shape::Record(&[("task", Shape::Text), ("owner", Shape::Text)]);

const STRATEGY_RECORD: Shape = Shape::Record(&[
    ("projectName", Shape::Text),
    ("meetingDate", Shape::Text),
    (
        "political",
        Shape::Record(&[
            ("decisionMaker", DECISION_MAKER),
            ("influencer", INFLUENCER),
            ("situationType", Shape::OneOf(SituationType::VALUES)),
        ]),
    ),
    (
        "risks",
        Shape::Record(&[("landmines", Shape::Text), ("hiddenCosts", Shape::Text)]),
    ),
    (
        "strategy",
        Shape::Record(&[
            ("role", Shape::OneOf(EngagementRole::VALUES)),
            ("actions", Shape::List(&ACTION_ITEM)),
        ]),
    ),
]);

impl Schema for StrategyRecord {
    const NAME: &'static str = "intelligence card";
    const SHAPE: Shape = STRATEGY_RECORD;
}

impl Schema for DualTextRecord {
    const NAME: &'static str = "meeting minutes";
    const SHAPE: Shape = Shape::Record(&[("email", Shape::Text), ("markdown", Shape::Text)]);
}

/// Path of the document root in error reports.
pub const ROOT_PATH: &str = "$";

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(path: &str, reason: String) -> ExtractError {
    ExtractError::SchemaMismatch {
        path: display_path(path),
        reason,
    }
}

/// Check a parsed value against a shape, reporting the first mismatch.
///
/// Fields are checked in declaration order, depth first, so the reported
/// path is deterministic. Fields not named by the shape are ignored.
pub fn check_shape(shape: &Shape, value: &Value, path: &str) -> ExtractResult<()> {
    match (shape, value) {
        (Shape::Text, Value::String(_)) | (Shape::Flag, Value::Bool(_)) => Ok(()),
        (Shape::Text, other) => Err(mismatch(
            path,
            format!("expected string, found {}", type_name(other)),
        )),
        (Shape::Flag, other) => Err(mismatch(
            path,
            format!("expected boolean, found {}", type_name(other)),
        )),
        (Shape::OneOf(values), Value::String(s)) => {
            if values.contains(&s.as_str()) {
                Ok(())
            } else {
                Err(mismatch(
                    path,
                    format!(
                        "unknown value `{}`, expected one of {}",
                        s,
                        values.join(", ")
                    ),
                ))
            }
        }
        (Shape::OneOf(_), other) => Err(mismatch(
            path,
            format!("expected string, found {}", type_name(other)),
        )),
        (Shape::Record(fields), Value::Object(map)) => {
            for (key, field_shape) in fields.iter() {
                let field_path = child_path(path, key);
                match map.get(*key) {
                    Some(field_value) => check_shape(field_shape, field_value, &field_path)?,
                    None => return Err(mismatch(&field_path, "missing field".to_string())),
                }
            }
            Ok(())
        }
        (Shape::Record(_), other) => Err(mismatch(
            path,
            format!("expected object, found {}", type_name(other)),
        )),
        (Shape::List(item_shape), Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", display_path(path), i);
                check_shape(item_shape, item, &item_path)?;
            }
            Ok(())
        }
        (Shape::List(_), other) => Err(mismatch(
            path,
            format!("expected array, found {}", type_name(other)),
        )),
    }
}
