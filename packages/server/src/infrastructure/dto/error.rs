//! Wire protocol errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The inbound text frame is not a known event
    #[error("Malformed inbound event: {0}")]
    Malformed(#[from] serde_json::Error),
}
