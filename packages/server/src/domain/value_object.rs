//! Value objects of the chat relay domain.
//!
//! Usernames and room names carry no validation: empty and duplicate values
//! are accepted as-is.

use std::fmt;

use uuid::Uuid;

/// Identifier of one live transport session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates fresh [`ConnectionId`]s for accepted sockets.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    pub fn generate() -> ConnectionId {
        ConnectionId(Uuid::new_v4().to_string())
    }
}

/// Display name a connection joined with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-sensitive room name supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single broadcast chat message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

pub struct MessageIdFactory;

impl MessageIdFactory {
    pub fn generate() -> MessageId {
        MessageId(Uuid::new_v4().to_string())
    }
}

/// Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_id_factory_generates_unique_ids() {
        // テスト項目: ConnectionIdFactory が毎回異なる ID を生成する
        // given (前提条件):

        // when (操作):
        let id1 = ConnectionIdFactory::generate();
        let id2 = ConnectionIdFactory::generate();

        // then (期待する結果):
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn test_message_id_factory_generates_unique_ids() {
        // テスト項目: MessageIdFactory が毎回異なる ID を生成する
        // given (前提条件):

        // when (操作):
        let id1 = MessageIdFactory::generate();
        let id2 = MessageIdFactory::generate();

        // then (期待する結果):
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_username_accepts_empty_string() {
        // テスト項目: 空のユーザー名もそのまま受け付ける
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let username = Username::new(value);

        // then (期待する結果):
        assert_eq!(username.as_str(), "");
    }

    #[test]
    fn test_room_name_is_case_sensitive() {
        // テスト項目: ルーム名は大文字小文字を区別する
        // given (前提条件):
        let lower = RoomName::new("lobby");
        let upper = RoomName::new("Lobby");

        // then (期待する結果):
        assert_ne!(lower, upper);
    }
}
