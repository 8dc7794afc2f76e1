//! Domain layer for the chat relay.
//!
//! This module contains the membership model and the event vocabulary,
//! independent of the websocket wire format and of how state is stored.

pub mod entity;
pub mod error;
pub mod event;
pub mod membership;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{Binding, ChatMessage, RoomOccupants};
pub use error::MessagePushError;
pub use event::{InboundEvent, OutboundEvent, PresenceNotice, TypingNotice};
pub use membership::{
    ConnectionRegistry, JoinTransition, LeaveTransition, Membership, RoomContext, RoomIndex,
    RoomRemoval,
};
pub use message_pusher::{MessagePusher, PusherChannel};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use repository::MembershipRepository;
pub use value_object::{
    ConnectionId, ConnectionIdFactory, MessageId, MessageIdFactory, RoomName, Timestamp, Username,
};
