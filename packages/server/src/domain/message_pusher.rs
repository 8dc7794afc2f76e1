//! MessagePusher trait 定義
//!
//! 接続中のクライアントにイベントを届けるためのインターフェース。
//! 具体的な実装（WebSocket）は Infrastructure 層が提供します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, OutboundEvent};

/// Channel carrying encoded frames to one connection's socket writer.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Delivery side of the transport substrate.
///
/// Delivery is fire-and-forget: implementations encode the event and hand it
/// to each recipient's channel without waiting for the socket write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register the outbound channel of a newly accepted connection
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Drop the outbound channel of a closed connection
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// Deliver an event to every connection in `targets`
    ///
    /// Missing or closed recipients are skipped; only encoding failures are
    /// reported as errors.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError>;
}
