//! Entities of the chat relay domain.

use super::value_object::{MessageId, RoomName, Timestamp, Username};

/// The (username, room) pair currently associated with a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub username: Username,
    pub room: RoomName,
}

impl Binding {
    pub fn new(username: Username, room: RoomName) -> Self {
        Self { username, room }
    }
}

/// A chat message as broadcast to a room. Never stored after delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub username: Username,
    pub text: String,
    pub room: RoomName,
    pub timestamp: Timestamp,
}

/// A room and the usernames currently in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOccupants {
    pub room: RoomName,
    pub usernames: Vec<Username>,
}
