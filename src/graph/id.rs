//! Graph object identifiers and their wire text form.
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Globally addressable identifier of a vertex or edge.
///
/// The server prints a graphid as `label_id.local_id`, two decimal integers
/// joined by a dot, and that form round-trips exactly through
/// [`FromStr`]/[`fmt::Display`]. Ordering and equality follow the integer
/// pair.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct GraphId {
    /// Identifier of the label the object belongs to.
    pub label_id: u64,
    /// Identifier of the object within its label.
    pub local_id: u64,
}

impl GraphId {
    /// Builds an id from its two components.
    pub fn new(label_id: u64, local_id: u64) -> Self {
        GraphId { label_id, local_id }
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label_id, self.local_id)
    }
}

impl FromStr for GraphId {
    type Err = DriverError;

    /// Parses the exact wire form `<digits>.<digits>`.
    ///
    /// No whitespace tolerance, no sign characters, no extra separators; a
    /// component that overflows 64 bits is also rejected.
    fn from_str(text: &str) -> Result<Self> {
        let (label, local) = text
            .split_once('.')
            .ok_or_else(|| DriverError::format("graphid", format!("expected '.' in '{text}'")))?;
        Ok(GraphId {
            label_id: id_component(label, text)?,
            local_id: id_component(local, text)?,
        })
    }
}

fn id_component(part: &str, whole: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DriverError::format(
            "graphid",
            format!("'{whole}' is not <digits>.<digits>"),
        ));
    }
    part.parse()
        .map_err(|_| DriverError::format("graphid", format!("component out of range in '{whole}'")))
}

/// Decodes the server's one-dimensional graphid array form `{a.b,c.d,...}`.
///
/// `{}` is a valid empty array. Text that is not brace-wrapped, and any
/// element that is not a well-formed graphid, is a format error.
pub fn decode_graphid_array(text: &str) -> Result<Vec<GraphId>> {
    let inner = text
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .ok_or_else(|| {
            DriverError::format("graphid array", format!("'{text}' is not brace-wrapped"))
        })?;
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    inner.split(',').map(str::parse).collect()
}
