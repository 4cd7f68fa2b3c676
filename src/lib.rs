//! Text-protocol core for the Enlace graph database client.
//!
//! Enlace talks to a graph-extended relational server. Two subsystems here do
//! the real work, and everything else in a driver build sits around them:
//!
//! - [`query`] rewrites `$name` placeholders in application queries to the
//!   positional markers the statement layer understands, skipping quoted
//!   literals, identifiers, comments, and dollar-quoted strings.
//! - [`graph`] decodes the server's composite text serialization of graph
//!   values (graphid, vertex, edge, path, graphid array) into immutable typed
//!   entities, using `serde_json` for the embedded property objects.
//!
//! Every operation is a pure function of its input text: synchronous,
//! reentrant, and free of shared state, so concurrent callers need no
//! coordination.

pub mod error;
pub mod graph;
pub mod query;

pub use error::{DriverError, Result};
pub use graph::{Edge, GraphEntity, GraphId, GraphType, GraphValue, Path, TypeRegistry, Vertex};
pub use query::{rewrite, RewrittenQuery};
