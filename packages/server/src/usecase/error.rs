//! UseCase error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetRoomDetailError {
    #[error("Room '{0}' not found")]
    RoomNotFound(String),
}
