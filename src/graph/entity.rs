//! Vertex and edge decoding from the server's composite text format.
//!
//! A vertex arrives as `label[graphid]{json-properties}` and an edge as
//! `label[graphid][start_graphid,end_graphid]{json-properties}`. The bracket
//! layout is a versioned wire contract owned by the server; the decoders
//! match it exactly and reject anything else. Construction is all-or-nothing:
//! a failed parse never leaks a partially populated entity.
#![forbid(unsafe_code)]

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{DriverError, Result};
use crate::graph::id::GraphId;

/// Fields common to vertices and edges: a label, an identity, and a JSON
/// property bag.
///
/// Immutable after decoding. A successful decode guarantees `properties` is a
/// JSON object, though the field type admits any JSON value so that a
/// property tree can be carried around without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEntity {
    label: String,
    id: GraphId,
    properties: Value,
}

impl GraphEntity {
    /// Label the object was created with.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Identity of the object.
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// The decoded property tree.
    pub fn properties(&self) -> &Value {
        &self.properties
    }

    /// Looks up a property by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Whether a property with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// String property, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Integer property, if present and an integer.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Float property, if present and numeric.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Boolean property, if present and boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Whether the property exists and is JSON null.
    pub fn is_null(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_null)
    }
}

/// A graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    #[serde(flatten)]
    entity: GraphEntity,
}

impl Vertex {
    /// Decodes one vertex literal, e.g. `person[16.3]{"name": "Ann"}`.
    pub fn decode(text: &str) -> Result<Vertex> {
        let (label, rest) = split_label(text, "vertex")?;
        let (id_text, rest) = take_bracketed(rest, "vertex")?;
        let id = id_text.parse()?;
        let properties = decode_properties(rest, "vertex")?;
        Ok(Vertex {
            entity: GraphEntity {
                label: label.to_owned(),
                id,
                properties,
            },
        })
    }

    /// The shared label/id/properties record.
    pub fn entity(&self) -> &GraphEntity {
        &self.entity
    }

    /// Label of the vertex.
    pub fn label(&self) -> &str {
        self.entity.label()
    }

    /// Identity of the vertex.
    pub fn id(&self) -> GraphId {
        self.entity.id()
    }

    /// Decoded property object.
    pub fn properties(&self) -> &Value {
        self.entity.properties()
    }
}

impl fmt::Display for Vertex {
    /// Reproduces the wire form (property spacing normalized by the JSON
    /// serializer).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]{}",
            self.entity.label, self.entity.id, self.entity.properties
        )
    }
}

/// A directed graph edge.
///
/// `start_id` and `end_id` are the endpoints the edge connects; direction is
/// significant and the two are never interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    #[serde(flatten)]
    entity: GraphEntity,
    start_id: GraphId,
    end_id: GraphId,
}

impl Edge {
    /// Decodes one edge literal, e.g. `knows[5.7][16.3,16.4]{"since": 2020}`.
    pub fn decode(text: &str) -> Result<Edge> {
        let (label, rest) = split_label(text, "edge")?;
        let (id_text, rest) = take_bracketed(rest, "edge")?;
        let id = id_text.parse()?;
        let (endpoints, rest) = take_bracketed(rest, "edge")?;
        let (start, end) = endpoints.split_once(',').ok_or_else(|| {
            DriverError::format("edge", format!("expected two endpoint ids, got '{endpoints}'"))
        })?;
        let start_id = start.parse()?;
        let end_id = end.parse()?;
        let properties = decode_properties(rest, "edge")?;
        Ok(Edge {
            entity: GraphEntity {
                label: label.to_owned(),
                id,
                properties,
            },
            start_id,
            end_id,
        })
    }

    /// The shared label/id/properties record.
    pub fn entity(&self) -> &GraphEntity {
        &self.entity
    }

    /// Label of the edge.
    pub fn label(&self) -> &str {
        self.entity.label()
    }

    /// Identity of the edge.
    pub fn id(&self) -> GraphId {
        self.entity.id()
    }

    /// Identity of the vertex the edge starts at.
    pub fn start_id(&self) -> GraphId {
        self.start_id
    }

    /// Identity of the vertex the edge ends at.
    pub fn end_id(&self) -> GraphId {
        self.end_id
    }

    /// Decoded property object.
    pub fn properties(&self) -> &Value {
        self.entity.properties()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}][{},{}]{}",
            self.entity.label, self.entity.id, self.start_id, self.end_id, self.entity.properties
        )
    }
}

fn split_label<'a>(text: &'a str, kind: &'static str) -> Result<(&'a str, &'a str)> {
    match text.find('[') {
        Some(0) => Err(DriverError::format(kind, "empty label")),
        Some(open) => Ok((&text[..open], &text[open..])),
        None => Err(DriverError::format(
            kind,
            format!("missing '[' after label in '{text}'"),
        )),
    }
}

fn take_bracketed<'a>(text: &'a str, kind: &'static str) -> Result<(&'a str, &'a str)> {
    let body = text
        .strip_prefix('[')
        .ok_or_else(|| DriverError::format(kind, format!("expected '[' at '{text}'")))?;
    let close = body
        .find(']')
        .ok_or_else(|| DriverError::format(kind, "unterminated id bracket"))?;
    Ok((&body[..close], &body[close + 1..]))
}

fn decode_properties(text: &str, kind: &'static str) -> Result<Value> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| DriverError::format(kind, format!("invalid property json: {err}")))?;
    if !value.is_object() {
        return Err(DriverError::TypeMismatch {
            kind,
            found: json_type_name(&value),
        });
    }
    Ok(value)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
