//! Crate-wide error type shared by the rewriter and the value decoders.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Errors produced by the driver's text-protocol core.
///
/// Decoding errors are deterministic functions of the input text: a malformed
/// graph value means the server and driver disagree on the wire contract, so
/// failures surface to the caller instead of being silently recovered.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Input text does not match the wire grammar for the value being decoded.
    #[error("malformed {kind} text: {detail}")]
    Format {
        /// Wire type being decoded when the mismatch was found.
        kind: &'static str,
        /// What the decoder saw.
        detail: String,
    },
    /// Decoded JSON had the wrong shape for the slot it fills.
    #[error("{kind} properties must be a json object, got {found}")]
    TypeMismatch {
        /// Wire type being decoded.
        kind: &'static str,
        /// JSON type that actually arrived.
        found: &'static str,
    },
    /// Caller misuse, reported before any scanning starts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Result-retrieval asked for a server type the registry does not know.
    #[error("no decoder registered for server type '{0}'")]
    UnknownType(String),
}

impl DriverError {
    pub(crate) fn format(kind: &'static str, detail: impl Into<String>) -> Self {
        DriverError::Format {
            kind,
            detail: detail.into(),
        }
    }
}
