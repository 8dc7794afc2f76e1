//! Domain error types.

use thiserror::Error;

/// Failures reported by a [`MessagePusher`](super::MessagePusher).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessagePushError {
    /// The outbound event could not be encoded
    #[error("Failed to encode outbound event: {0}")]
    Serialization(String),
}
