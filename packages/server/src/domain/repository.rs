//! Repository trait 定義
//!
//! ルームのメンバーシップ状態へのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, JoinTransition, LeaveTransition, RoomContext, RoomName, Username};

/// Membership Repository trait
///
/// Every method is one atomic step on the registry and room index together:
/// no caller can observe a connection that is bound in the registry but
/// missing from its room, or the reverse. Returned values are snapshots taken
/// inside that step, so broadcasting from them needs no further locking.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Move the connection into `room`, leaving its previous room first
    async fn join(
        &self,
        connection_id: ConnectionId,
        username: Username,
        room: RoomName,
    ) -> JoinTransition;

    /// Unbind the connection; `None` when it was not bound
    async fn leave(&self, connection_id: &ConnectionId) -> Option<LeaveTransition>;

    /// Binding and room members of a bound connection
    async fn context(&self, connection_id: &ConnectionId) -> Option<RoomContext>;

    /// Names of all non-empty rooms
    async fn list_rooms(&self) -> Vec<RoomName>;

    /// Usernames in `room`, in join order; `None` when the room does not exist
    async fn room_usernames(&self, room: &RoomName) -> Option<Vec<Username>>;
}
