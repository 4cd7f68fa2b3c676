//! Typed dispatch from server type identifiers to graph value decoders.
//!
//! The decoder never sniffs the text to guess what it holds; the result
//! layer selects a decoder from the type tag delivered alongside each
//! column. The mapping from server type identifier to tag is an explicit
//! table supplied by the caller at result-retrieval time, not mutable global
//! registration state.
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{DriverError, Result};
use crate::graph::entity::{Edge, Vertex};
use crate::graph::id::{decode_graphid_array, GraphId};
use crate::graph::path::Path;

/// Closed set of graph-typed column shapes the driver can decode.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GraphType {
    /// A bare `graphid`.
    GraphId,
    /// A vertex literal.
    Vertex,
    /// An edge literal.
    Edge,
    /// A path literal.
    Path,
    /// A one-dimensional array of graphids.
    GraphIdArray,
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphType::GraphId => "graphid",
            GraphType::Vertex => "vertex",
            GraphType::Edge => "edge",
            GraphType::Path => "graphpath",
            GraphType::GraphIdArray => "graphid array",
        };
        f.write_str(name)
    }
}

/// One decoded graph-typed column value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "t", content = "v")]
pub enum GraphValue {
    /// A bare identifier.
    Id(GraphId),
    /// A decoded vertex.
    Vertex(Vertex),
    /// A decoded edge.
    Edge(Edge),
    /// A decoded path.
    Path(Path),
    /// A decoded graphid array.
    IdArray(Vec<GraphId>),
}

impl GraphValue {
    /// Tag of the variant held.
    pub fn graph_type(&self) -> GraphType {
        match self {
            GraphValue::Id(_) => GraphType::GraphId,
            GraphValue::Vertex(_) => GraphType::Vertex,
            GraphValue::Edge(_) => GraphType::Edge,
            GraphValue::Path(_) => GraphType::Path,
            GraphValue::IdArray(_) => GraphType::GraphIdArray,
        }
    }

    /// The vertex inside, if this is one.
    pub fn as_vertex(&self) -> Option<&Vertex> {
        match self {
            GraphValue::Vertex(v) => Some(v),
            _ => None,
        }
    }

    /// The edge inside, if this is one.
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            GraphValue::Edge(e) => Some(e),
            _ => None,
        }
    }

    /// The path inside, if this is one.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            GraphValue::Path(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for GraphValue {
    /// Prints the value back in its wire form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphValue::Id(id) => id.fmt(f),
            GraphValue::Vertex(v) => v.fmt(f),
            GraphValue::Edge(e) => e.fmt(f),
            GraphValue::Path(p) => p.fmt(f),
            GraphValue::IdArray(ids) => {
                f.write_str("{")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    id.fmt(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Decodes one column value of a known graph type.
pub fn decode(ty: GraphType, text: &str) -> Result<GraphValue> {
    match ty {
        GraphType::GraphId => text.parse().map(GraphValue::Id),
        GraphType::Vertex => Vertex::decode(text).map(GraphValue::Vertex),
        GraphType::Edge => Edge::decode(text).map(GraphValue::Edge),
        GraphType::Path => Path::decode(text).map(GraphValue::Path),
        GraphType::GraphIdArray => decode_graphid_array(text).map(GraphValue::IdArray),
    }
}

/// Caller-owned table from server type identifier to decoder tag.
///
/// Result-retrieval code holds one of these and consults it per column; the
/// table never changes behind a connection's back.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, GraphType>,
}

impl TypeRegistry {
    /// An empty table.
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// A table preloaded with the server's type names.
    pub fn with_defaults() -> Self {
        let mut registry = TypeRegistry::new();
        registry.register("graphid", GraphType::GraphId);
        registry.register("vertex", GraphType::Vertex);
        registry.register("edge", GraphType::Edge);
        registry.register("graphpath", GraphType::Path);
        registry.register("_graphid", GraphType::GraphIdArray);
        registry
    }

    /// Maps a server type identifier to a decoder tag.
    pub fn register(&mut self, type_name: impl Into<String>, ty: GraphType) {
        self.types.insert(type_name.into(), ty);
    }

    /// The tag registered for a server type identifier, if any.
    pub fn lookup(&self, type_name: &str) -> Option<GraphType> {
        self.types.get(type_name).copied()
    }

    /// Decodes a column value by server type identifier.
    pub fn decode(&self, type_name: &str, text: &str) -> Result<GraphValue> {
        let ty = self
            .lookup(type_name)
            .ok_or_else(|| DriverError::UnknownType(type_name.to_owned()))?;
        debug!(%ty, type_name, "decoding graph column value");
        decode(ty, text)
    }
}
