//! Conversion logic between DTOs and domain events.

use hiroba_shared::time::timestamp_to_rfc3339;

use crate::domain::{
    ChatMessage, InboundEvent, OutboundEvent, PresenceNotice, RoomName, TypingNotice, Username,
};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain
// ========================================

impl From<dto::InboundMessage> for InboundEvent {
    fn from(message: dto::InboundMessage) -> Self {
        match message {
            dto::InboundMessage::JoinRoom(payload) => Self::JoinRoom {
                username: Username::new(payload.username),
                room: RoomName::new(payload.room),
            },
            dto::InboundMessage::ChatMessage(payload) => Self::ChatMessage {
                text: payload.message,
            },
            dto::InboundMessage::Typing(is_typing) => Self::Typing { is_typing },
            dto::InboundMessage::LeaveRoom => Self::LeaveRoom,
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&PresenceNotice> for dto::PresencePayload {
    fn from(notice: &PresenceNotice) -> Self {
        Self {
            username: notice.username.as_str().to_string(),
            message: notice.message.clone(),
            timestamp: timestamp_to_rfc3339(notice.timestamp.value()),
        }
    }
}

impl From<&ChatMessage> for dto::ChatMessagePayload {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.as_str().to_string(),
            username: message.username.as_str().to_string(),
            message: message.text.clone(),
            timestamp: timestamp_to_rfc3339(message.timestamp.value()),
            room: message.room.as_str().to_string(),
        }
    }
}

impl From<&TypingNotice> for dto::TypingPayload {
    fn from(notice: &TypingNotice) -> Self {
        Self {
            username: notice.username.as_str().to_string(),
            is_typing: notice.is_typing,
        }
    }
}

impl From<&OutboundEvent> for dto::OutboundMessage {
    fn from(event: &OutboundEvent) -> Self {
        match event {
            OutboundEvent::UserJoined(notice) => Self::UserJoined(notice.into()),
            OutboundEvent::UserLeft(notice) => Self::UserLeft(notice.into()),
            OutboundEvent::RoomUsers(usernames) => Self::RoomUsers(
                usernames
                    .iter()
                    .map(|username| username.as_str().to_string())
                    .collect(),
            ),
            OutboundEvent::ChatMessage(message) => Self::ChatMessage(message.into()),
            OutboundEvent::UserTyping(notice) => Self::UserTyping(notice.into()),
        }
    }
}
