//! WebSocket event DTOs.
//!
//! Every frame is a JSON object `{"event": <name>, "data": <payload>}`.

use serde::{Deserialize, Serialize};

use super::error::ProtocolError;

/// Payload of `join-room`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinRoomPayload {
    pub username: String,
    pub room: String,
}

/// Payload of inbound `chat-message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessagePayload {
    pub message: String,
}

/// Frames sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum InboundMessage {
    JoinRoom(JoinRoomPayload),
    ChatMessage(SendMessagePayload),
    Typing(bool),
    LeaveRoom,
}

impl InboundMessage {
    /// Decode one text frame.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Payload of `user-joined` and `user-left`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresencePayload {
    pub username: String,
    pub message: String,
    pub timestamp: String,
}

/// Payload of outbound `chat-message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessagePayload {
    pub id: String,
    pub username: String,
    pub message: String,
    pub timestamp: String,
    pub room: String,
}

/// Payload of `user-typing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingPayload {
    pub username: String,
    #[serde(rename = "isTyping")]
    pub is_typing: bool,
}

/// Frames sent to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum OutboundMessage {
    UserJoined(PresencePayload),
    UserLeft(PresencePayload),
    RoomUsers(Vec<String>),
    ChatMessage(ChatMessagePayload),
    UserTyping(TypingPayload),
}

impl OutboundMessage {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_join_room() {
        // テスト項目: join-room フレームがデコードされる
        // given (前提条件):
        let text = r#"{"event":"join-room","data":{"username":"alice","room":"lobby"}}"#;

        // when (操作):
        let result = InboundMessage::decode(text);

        // then (期待する結果):
        assert_eq!(
            result.unwrap(),
            InboundMessage::JoinRoom(JoinRoomPayload {
                username: "alice".to_string(),
                room: "lobby".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_typing_and_leave() {
        // テスト項目: typing は真偽値のペイロード、leave-room はペイロードなしでデコードされる
        // given (前提条件):
        let typing = r#"{"event":"typing","data":true}"#;
        let leave = r#"{"event":"leave-room"}"#;

        // when (操作):
        let typing = InboundMessage::decode(typing);
        let leave = InboundMessage::decode(leave);

        // then (期待する結果):
        assert_eq!(typing.unwrap(), InboundMessage::Typing(true));
        assert_eq!(leave.unwrap(), InboundMessage::LeaveRoom);
    }

    #[test]
    fn test_decode_rejects_unknown_and_malformed_frames() {
        // テスト項目: 未知のイベント名や壊れた JSON はエラーになる
        // given (前提条件):
        let unknown = r#"{"event":"shout","data":"HEY"}"#;
        let malformed = "hello";
        let wrong_payload = r#"{"event":"typing","data":"yes"}"#;

        // then (期待する結果):
        assert!(matches!(
            InboundMessage::decode(unknown),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(InboundMessage::decode(malformed).is_err());
        assert!(InboundMessage::decode(wrong_payload).is_err());
    }

    #[test]
    fn test_encode_outbound_wire_format() {
        // テスト項目: 送信イベントが event / data 形式でエンコードされる
        // given (前提条件):
        let typing = OutboundMessage::UserTyping(TypingPayload {
            username: "alice".to_string(),
            is_typing: true,
        });
        let users = OutboundMessage::RoomUsers(vec!["alice".to_string(), "bob".to_string()]);

        // when (操作):
        let typing: serde_json::Value = serde_json::from_str(&typing.encode().unwrap()).unwrap();
        let users: serde_json::Value = serde_json::from_str(&users.encode().unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(
            typing,
            json!({"event": "user-typing", "data": {"username": "alice", "isTyping": true}})
        );
        assert_eq!(users, json!({"event": "room-users", "data": ["alice", "bob"]}));
    }
}
