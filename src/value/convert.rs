//! Conversion between [`Value`] and JSON/YAML.
//!
//! Store-minted scalars ride on plain JSON as single-key wrapper objects:
//! a date-time is `{"$date": <millis>}` and an identifier is
//! `{"$oid": "<canonical>"}`. Parsing recognizes exactly those shapes; any
//! other object converts structurally, so a document that happens to contain
//! a `$date` field next to other fields is left alone.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::id::Identifier;
use super::value::{DateTime, Document, Value};

/// ConvertError represents a failure to convert between wire data and values.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("number {0} has no document representation")]
    UnsupportedNumber(String),

    #[error("mapping key is not a string: {0}")]
    NonStringKey(String),

    #[error("expected a document at the top level, got {kind}")]
    NotADocument { kind: &'static str },
}

/// Parses a JSON string into a value.
pub fn from_json(json: &str) -> Result<Value, ConvertError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    value_from_json(&parsed)
}

/// Serializes a value to a JSON string.
pub fn to_json(value: &Value) -> Result<String, ConvertError> {
    Ok(serde_json::to_string(value)?)
}

/// Parses a YAML string into a value.
pub fn from_yaml(yaml: &str) -> Result<Value, ConvertError> {
    let parsed: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    value_from_yaml(&parsed)
}

/// Serializes a value to a YAML string.
pub fn to_yaml(value: &Value) -> Result<String, ConvertError> {
    Ok(serde_yaml::to_string(value)?)
}

/// Parses a JSON string that must hold a document at the top level.
pub fn doc_from_json(json: &str) -> Result<Document, ConvertError> {
    match from_json(json)? {
        Value::Doc(doc) => Ok(doc),
        other => Err(ConvertError::NotADocument {
            kind: other.kind_name(),
        }),
    }
}

/// Converts an already-parsed JSON value.
pub fn value_from_json(json: &serde_json::Value) -> Result<Value, ConvertError> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => number_from_json(n)?,
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::List(
            items
                .iter()
                .map(value_from_json)
                .collect::<Result<_, _>>()?,
        ),
        serde_json::Value::Object(map) => {
            let pairs = map
                .iter()
                .map(|(key, item)| Ok((key.clone(), value_from_json(item)?)))
                .collect::<Result<Vec<_>, ConvertError>>()?;
            value_from_pairs(pairs)
        }
    })
}

/// Converts a value into a JSON value.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::DateTime(dt) => {
            let mut map = serde_json::Map::with_capacity(1);
            map.insert("$date".to_string(), dt.timestamp_millis().into());
            serde_json::Value::Object(map)
        }
        Value::Id(id) => {
            let mut map = serde_json::Map::with_capacity(1);
            map.insert("$oid".to_string(), id.as_str().into());
            serde_json::Value::Object(map)
        }
        Value::List(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::Doc(doc) => serde_json::Value::Object(
            doc.iter()
                .map(|(key, item)| (key.clone(), value_to_json(item)))
                .collect(),
        ),
    }
}

fn number_from_json(n: &serde_json::Number) -> Result<Value, ConvertError> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Int(i))
    } else if n.as_u64().is_some() {
        // Out of i64 range; converting through f64 would silently lose
        // precision.
        Err(ConvertError::UnsupportedNumber(n.to_string()))
    } else if let Some(f) = n.as_f64() {
        Ok(Value::Float(f))
    } else {
        Err(ConvertError::UnsupportedNumber(n.to_string()))
    }
}

fn value_from_yaml(yaml: &serde_yaml::Value) -> Result<Value, ConvertError> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                return Err(ConvertError::UnsupportedNumber(n.to_string()));
            }
        }
        serde_yaml::Value::String(s) => Value::String(s.clone()),
        serde_yaml::Value::Sequence(items) => Value::List(
            items
                .iter()
                .map(value_from_yaml)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let pairs = map
                .iter()
                .map(|(key, item)| {
                    let key = key
                        .as_str()
                        .ok_or_else(|| ConvertError::NonStringKey(format!("{:?}", key)))?;
                    Ok((key.to_string(), value_from_yaml(item)?))
                })
                .collect::<Result<Vec<_>, ConvertError>>()?;
            value_from_pairs(pairs)
        }
        serde_yaml::Value::Tagged(tagged) => value_from_yaml(&tagged.value)?,
    })
}

/// Finishes converting a mapping, recognizing the extended-scalar wrappers.
fn value_from_pairs(pairs: Vec<(String, Value)>) -> Value {
    if let [(key, value)] = pairs.as_slice() {
        match (key.as_str(), value) {
            ("$date", Value::Int(millis)) => {
                return Value::DateTime(DateTime::from_timestamp_millis(*millis));
            }
            ("$oid", Value::String(canonical)) => {
                return Value::Id(Identifier::from_canonical(canonical.clone()));
            }
            _ => {}
        }
    }
    let mut doc = Document::new();
    for (key, value) in pairs {
        doc.fields.insert(key, value);
    }
    Value::Doc(doc)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::DateTime(dt) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$date", &dt.timestamp_millis())?;
                map.end()
            }
            Value::Id(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$oid", id.as_str())?;
                map.end()
            }
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Doc(doc) => doc.serialize(serializer),
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
