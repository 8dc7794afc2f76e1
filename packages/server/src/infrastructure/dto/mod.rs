//! Data Transfer Objects (DTOs) for the chat relay.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket event DTOs
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod error;
pub mod http;
pub mod websocket;

pub use error::ProtocolError;
