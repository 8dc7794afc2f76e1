//! Room-scoped WebSocket chat relay.
//!
//! Clients join named rooms, exchange messages, and receive presence and
//! typing updates for the room they are in.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
