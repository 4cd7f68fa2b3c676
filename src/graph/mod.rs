#![forbid(unsafe_code)]

//! Graph value model and wire-text decoders.
//!
//! Each decoder consumes the exact text the server returns for one column of
//! a graph type and produces an immutable entity, independently per value; no
//! state is shared across rows or columns.

/// Vertex and edge decoding.
pub mod entity;

/// Graph object identifiers.
pub mod id;

/// Path decoding.
pub mod path;

/// Tagged dispatch and the server-type registry.
pub mod value;

pub use entity::{Edge, GraphEntity, Vertex};
pub use id::{decode_graphid_array, GraphId};
pub use path::Path;
pub use value::{decode, GraphType, GraphValue, TypeRegistry};
