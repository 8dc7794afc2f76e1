//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理
//! - ドメインイベントを JSON フレームにエンコードして送信（broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、送信に使用します。
//! ソケットへの書き込みは UI 層の pusher loop が行うため、ここでは待ちません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, OutboundEvent, PusherChannel},
    infrastructure::dto::websocket::OutboundMessage,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.broadcast(members, &OutboundEvent::RoomUsers(usernames)).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの WebSocket sender
    ///
    /// Key: connection_id
    /// Value: PusherChannel
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }

    fn encode(event: &OutboundEvent) -> Result<String, MessagePushError> {
        OutboundMessage::from(event)
            .encode()
            .map_err(|e| MessagePushError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Client '{}' registered to MessagePusher", connection_id);
        clients.insert(connection_id, sender);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!("Client '{}' unregistered from MessagePusher", connection_id);
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError> {
        let content = Self::encode(event)?;
        let clients = self.clients.lock().await;

        for target in targets {
            let Some(sender) = clients.get(&target) else {
                tracing::warn!(
                    "Client '{}' not found during broadcast, skipping",
                    target
                );
                continue;
            };
            // ブロードキャストでは一部の送信失敗を許容
            if let Err(e) = sender.send(content.clone()) {
                tracing::warn!("Failed to push {} to client '{}': {}", event.name(), target, e);
            } else {
                tracing::debug!("Broadcasted {} to client '{}'", event.name(), target);
            }
        }

        Ok(())
    }
}
