//! Path decoding: an alternating vertex/edge traversal in one text literal.
//!
//! The server prints a path as a bracketed, comma-separated list of vertex
//! and edge literals, e.g. `[v0,e0,v1,e1,v2]`. The elements themselves
//! contain brackets, braces, and commas of their own, so the outer list is
//! split by a scanner that tracks nesting depth and JSON string state rather
//! than splitting on every comma. This is server-composite syntax, not SQL;
//! the SQL boundary scanner is deliberately not reused here.
#![forbid(unsafe_code)]

use std::fmt;

use serde::Serialize;

use crate::error::{DriverError, Result};
use crate::graph::entity::{Edge, Vertex};

/// An ordered, non-empty alternating sequence of vertices and edges.
///
/// Holds `n` vertices and `n - 1` edges; the edge at position `i` connects
/// the vertices at positions `i` and `i + 1`. The decoder preserves the
/// server's ordering structurally and does not re-derive it from topology.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Path {
    /// Decodes one path literal.
    ///
    /// Fails on anything not bracket-wrapped, on unbalanced nesting, and on
    /// element counts that cannot alternate vertex/edge/.../vertex (zero or
    /// even).
    pub fn decode(text: &str) -> Result<Path> {
        let inner = text
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(|| {
                DriverError::format("graphpath", format!("'{text}' is not bracket-wrapped"))
            })?;
        if inner.is_empty() {
            return Err(DriverError::format("graphpath", "path has no elements"));
        }
        let elements = split_top_level(inner)?;
        if elements.len() % 2 == 0 {
            return Err(DriverError::format(
                "graphpath",
                format!(
                    "expected an odd number of alternating elements, got {}",
                    elements.len()
                ),
            ));
        }

        let mut vertices = Vec::with_capacity(elements.len() / 2 + 1);
        let mut edges = Vec::with_capacity(elements.len() / 2);
        for (idx, element) in elements.iter().enumerate() {
            if idx % 2 == 0 {
                vertices.push(Vertex::decode(element)?);
            } else {
                edges.push(Edge::decode(element)?);
            }
        }
        Ok(Path { vertices, edges })
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for a single-vertex path.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The vertex subsequence, in traversal order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The edge subsequence, in traversal order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// First vertex of the traversal.
    pub fn start(&self) -> &Vertex {
        &self.vertices[0]
    }

    /// Last vertex of the traversal.
    pub fn end(&self) -> &Vertex {
        &self.vertices[self.vertices.len() - 1]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.vertices[0])?;
        for (edge, vertex) in self.edges.iter().zip(&self.vertices[1..]) {
            write!(f, ",{edge},{vertex}")?;
        }
        write!(f, "]")
    }
}

/// Splits `inner` on commas at nesting depth zero.
///
/// `[`/`{` raise the depth, `]`/`}` lower it, and `"…"` JSON strings (with
/// backslash escapes) are opaque. Unbalanced nesting or an unterminated
/// string is a format error: unlike SQL scanning there is no permissive
/// fallback, because a malformed composite means the wire contract broke.
fn split_top_level(inner: &str) -> Result<Vec<&str>> {
    let bytes = inner.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if in_string {
            match bytes[i] {
                b'\\' => i += 1,
                b'"' => in_string = false,
                _ => {}
            }
        } else {
            match bytes[i] {
                b'"' => in_string = true,
                b'[' | b'{' => depth += 1,
                b']' | b'}' => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        DriverError::format("graphpath", "unbalanced brackets in path element")
                    })?;
                }
                b',' if depth == 0 => {
                    parts.push(&inner[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        i += 1;
    }
    if in_string {
        return Err(DriverError::format(
            "graphpath",
            "unterminated string in path element",
        ));
    }
    if depth != 0 {
        return Err(DriverError::format(
            "graphpath",
            "unbalanced brackets in path element",
        ));
    }
    parts.push(&inner[start..]);
    Ok(parts)
}
