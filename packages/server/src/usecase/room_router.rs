//! UseCase: ルームへのイベント振り分け
//!
//! ## 概要
//!
//! 接続から届いた [`InboundEvent`] を受け取り、メンバーシップを更新して、
//! 誰にどの [`OutboundEvent`] を届けるかを決めます。
//!
//! | 操作 | 配信先 |
//! |---|---|
//! | join | `user-joined`: 入室者以外 / `room-users`: 入室者を含む全員 |
//! | leave / disconnect | `user-left`, `room-users`: 残ったメンバー |
//! | route_message | `chat-message`: 送信者を含む全員 |
//! | set_typing | `user-typing`: 送信者以外 |
//!
//! メンバーシップの更新は Repository の1操作で完結し、配信はその操作が返した
//! スナップショットに対してロックの外で行います。未 join の接続からのイベントは
//! 何も配信せずに捨てます。

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{
    ChatMessage, ConnectionId, InboundEvent, LeaveTransition, MembershipRepository,
    MessageIdFactory, MessagePusher, OutboundEvent, PresenceNotice, PusherChannel, RoomName,
    Timestamp, TypingNotice, Username,
};

/// ルームへのイベント振り分けのユースケース
pub struct RoomRouter {
    /// Repository（メンバーシップ状態の抽象化）
    repository: Arc<dyn MembershipRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Clock（タイムスタンプ生成）
    clock: Arc<dyn Clock>,
}

impl RoomRouter {
    /// 新しい RoomRouter を作成
    pub fn new(
        repository: Arc<dyn MembershipRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// Register a newly accepted connection. It starts out unbound.
    pub async fn connect(&self, connection_id: ConnectionId, sender: PusherChannel) {
        tracing::info!("Connection '{}' opened", connection_id);
        self.message_pusher
            .register_client(connection_id, sender)
            .await;
    }

    /// Single entry point for inbound events.
    pub async fn dispatch(&self, connection_id: &ConnectionId, event: InboundEvent) {
        match event {
            InboundEvent::JoinRoom { username, room } => {
                self.join(connection_id, username, room).await
            }
            InboundEvent::ChatMessage { text } => self.route_message(connection_id, text).await,
            InboundEvent::Typing { is_typing } => self.set_typing(connection_id, is_typing).await,
            InboundEvent::LeaveRoom => self.leave(connection_id).await,
        }
    }

    pub async fn join(&self, connection_id: &ConnectionId, username: Username, room: RoomName) {
        let transition = self
            .repository
            .join(connection_id.clone(), username, room)
            .await;

        if let Some(previous) = &transition.previous {
            self.announce_departure(previous).await;
        }

        let username = transition.binding.username;
        let room = transition.binding.room;
        tracing::info!("{} joined room: {}", username, room);

        let joined = OutboundEvent::UserJoined(PresenceNotice::joined(username, self.now()));
        self.deliver(transition.others, &joined).await;

        let users = OutboundEvent::RoomUsers(transition.usernames);
        self.deliver(transition.members, &users).await;
    }

    /// Leave the current room. No-op when the connection is not bound.
    pub async fn leave(&self, connection_id: &ConnectionId) {
        match self.repository.leave(connection_id).await {
            Some(transition) => self.announce_departure(&transition).await,
            None => tracing::debug!("Connection '{}' is not in a room", connection_id),
        }
    }

    pub async fn route_message(&self, connection_id: &ConnectionId, text: String) {
        let Some(context) = self.repository.context(connection_id).await else {
            tracing::debug!(
                "Dropping message from '{}': not in a room",
                connection_id
            );
            return;
        };

        tracing::info!(
            "Message in {} from {}: {}",
            context.binding.room,
            context.binding.username,
            text
        );

        let message = ChatMessage {
            id: MessageIdFactory::generate(),
            username: context.binding.username,
            text,
            room: context.binding.room,
            timestamp: self.now(),
        };
        self.deliver(context.members, &OutboundEvent::ChatMessage(message))
            .await;
    }

    pub async fn set_typing(&self, connection_id: &ConnectionId, is_typing: bool) {
        let Some(context) = self.repository.context(connection_id).await else {
            tracing::debug!(
                "Dropping typing update from '{}': not in a room",
                connection_id
            );
            return;
        };

        let targets = context
            .members
            .into_iter()
            .filter(|id| id != connection_id)
            .collect();
        let typing = OutboundEvent::UserTyping(TypingNotice {
            username: context.binding.username,
            is_typing,
        });
        self.deliver(targets, &typing).await;
    }

    /// Transport lost the connection: leave its room, then drop its channel.
    ///
    /// Safe for connections that never joined.
    pub async fn disconnect(&self, connection_id: &ConnectionId) {
        self.leave(connection_id).await;
        self.message_pusher.unregister_client(connection_id).await;
        tracing::info!("Connection '{}' closed", connection_id);
    }

    async fn announce_departure(&self, transition: &LeaveTransition) {
        let username = &transition.binding.username;
        let room = &transition.binding.room;
        tracing::info!("{} left room: {}", username, room);

        if transition.remaining.is_empty() {
            tracing::debug!("Room '{}' is empty and was removed", room);
            return;
        }

        let left = OutboundEvent::UserLeft(PresenceNotice::left(username.clone(), self.now()));
        self.deliver(transition.remaining.clone(), &left).await;

        let users = OutboundEvent::RoomUsers(transition.usernames.clone());
        self.deliver(transition.remaining.clone(), &users).await;
    }

    async fn deliver(&self, targets: Vec<ConnectionId>, event: &OutboundEvent) {
        if targets.is_empty() {
            return;
        }
        if let Err(e) = self.message_pusher.broadcast(targets, event).await {
            tracing::warn!("Failed to broadcast {}: {}", event.name(), e);
        }
    }

    fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }
}
