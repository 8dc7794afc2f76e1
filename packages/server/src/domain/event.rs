//! Closed event vocabulary exchanged with connections.
//!
//! Every inbound frame decodes into one [`InboundEvent`] and every delivery is
//! one [`OutboundEvent`], so dispatch is an exhaustive `match` rather than a
//! lookup by event name.

use super::{
    entity::ChatMessage,
    value_object::{RoomName, Timestamp, Username},
};

/// Events a connection sends to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Bind the connection to `room` under `username`, leaving any previous room
    JoinRoom { username: Username, room: RoomName },
    /// Broadcast `text` to the sender's room
    ChatMessage { text: String },
    /// Typing indicator change for the sender
    Typing { is_typing: bool },
    /// Leave the current room while keeping the connection open
    LeaveRoom,
}

/// Join/leave notice shown to the other members of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceNotice {
    pub username: Username,
    pub message: String,
    pub timestamp: Timestamp,
}

impl PresenceNotice {
    pub fn joined(username: Username, timestamp: Timestamp) -> Self {
        let message = format!("{username} joined the room");
        Self {
            username,
            message,
            timestamp,
        }
    }

    pub fn left(username: Username, timestamp: Timestamp) -> Self {
        let message = format!("{username} left the room");
        Self {
            username,
            message,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingNotice {
    pub username: Username,
    pub is_typing: bool,
}

/// Events the relay delivers to connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    UserJoined(PresenceNotice),
    UserLeft(PresenceNotice),
    /// Usernames of the room members, in join order
    RoomUsers(Vec<Username>),
    ChatMessage(ChatMessage),
    UserTyping(TypingNotice),
}

impl OutboundEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserJoined(_) => "user-joined",
            Self::UserLeft(_) => "user-left",
            Self::RoomUsers(_) => "room-users",
            Self::ChatMessage(_) => "chat-message",
            Self::UserTyping(_) => "user-typing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_notice_messages() {
        // テスト項目: 入室・退室の通知メッセージがユーザー名から組み立てられる
        // given (前提条件):
        let timestamp = Timestamp::new(1000);

        // when (操作):
        let joined = PresenceNotice::joined(Username::new("alice"), timestamp);
        let left = PresenceNotice::left(Username::new("bob"), timestamp);

        // then (期待する結果):
        assert_eq!(joined.message, "alice joined the room");
        assert_eq!(left.message, "bob left the room");
        assert_eq!(left.username, Username::new("bob"));
    }
}
