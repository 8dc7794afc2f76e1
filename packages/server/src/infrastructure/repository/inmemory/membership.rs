//! InMemory Membership Repository 実装
//!
//! ドメイン層が定義する MembershipRepository trait の具体的な実装。
//! `Membership` ドメインモデルを1つの Mutex で保護し、レジストリとルーム
//! インデックスへの複合操作をすべて同じクリティカルセクション内で行います。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, JoinTransition, LeaveTransition, Membership, MembershipRepository,
    RoomContext, RoomName, Username,
};

/// インメモリ Membership Repository 実装
pub struct InMemoryMembershipRepository {
    /// Membership ドメインモデル
    membership: Arc<Mutex<Membership>>,
}

impl InMemoryMembershipRepository {
    /// 新しい InMemoryMembershipRepository を作成
    pub fn new(membership: Arc<Mutex<Membership>>) -> Self {
        Self { membership }
    }
}

impl Default for InMemoryMembershipRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(Membership::new())))
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn join(
        &self,
        connection_id: ConnectionId,
        username: Username,
        room: RoomName,
    ) -> JoinTransition {
        let mut membership = self.membership.lock().await;
        membership.join(connection_id, username, room)
    }

    async fn leave(&self, connection_id: &ConnectionId) -> Option<LeaveTransition> {
        let mut membership = self.membership.lock().await;
        membership.leave(connection_id)
    }

    async fn context(&self, connection_id: &ConnectionId) -> Option<RoomContext> {
        let membership = self.membership.lock().await;
        membership.context(connection_id)
    }

    async fn list_rooms(&self) -> Vec<RoomName> {
        let membership = self.membership.lock().await;
        membership.room_names()
    }

    async fn room_usernames(&self, room: &RoomName) -> Option<Vec<Username>> {
        let membership = self.membership.lock().await;
        membership.room_usernames(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryMembershipRepository が Membership の遷移をそのまま公開すること
    // - 並行する join / leave の後もレジストリとルームインデックスが一致すること
    //
    // 【なぜこのテストが必要か】
    // - 複数の接続のハンドラが同時に状態を更新するため、
    //   中途半端な状態が観測されないことを保証する必要がある
    // ========================================

    #[tokio::test]
    async fn test_join_and_leave_through_repository() {
        // テスト項目: join / context / leave がドメインモデルに反映される
        // given (前提条件):
        let membership = Arc::new(Mutex::new(Membership::new()));
        let repo = InMemoryMembershipRepository::new(membership.clone());
        let a = ConnectionId::new("a");

        // when (操作):
        repo.join(a.clone(), Username::new("A"), RoomName::new("lobby"))
            .await;
        let context = repo.context(&a).await;

        // then (期待する結果):
        let context = context.expect("joined connection should have a context");
        assert_eq!(context.members, vec![a.clone()]);
        assert_eq!(
            repo.room_usernames(&RoomName::new("lobby")).await,
            Some(vec![Username::new("A")])
        );

        let left = repo.leave(&a).await;
        assert!(left.is_some());
        assert!(repo.leave(&a).await.is_none());
        assert!(repo.list_rooms().await.is_empty());
        assert!(membership.lock().await.is_consistent());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_transitions_keep_state_consistent() {
        // テスト項目: 複数タスクから同時に join / leave しても整合性が崩れない
        // given (前提条件):
        let membership = Arc::new(Mutex::new(Membership::new()));
        let repo = Arc::new(InMemoryMembershipRepository::new(membership.clone()));
        let rooms = ["lobby", "kitchen", "attic"];

        // when (操作):
        let mut handles = Vec::new();
        for task in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let id = ConnectionId::new(format!("conn-{task}"));
                for step in 0..50 {
                    let room = RoomName::new(rooms[(task + step) % rooms.len()]);
                    repo.join(id.clone(), Username::new(format!("user-{task}")), room)
                        .await;
                    if step % 4 == 0 {
                        repo.leave(&id).await;
                    }
                }
            }));
        }
        for handle in handles {
            handle.await.expect("task should not panic");
        }

        // then (期待する結果): 最後の step (49) は leave しないので全員どこかのルームにいる
        let membership = membership.lock().await;
        assert!(membership.is_consistent());
        let total: usize = membership
            .room_names()
            .iter()
            .map(|room| membership.members(room).len())
            .sum();
        assert_eq!(total, 8);
    }
}
