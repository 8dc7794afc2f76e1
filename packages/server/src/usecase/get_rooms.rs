//! UseCase: ルーム一覧取得

use std::sync::Arc;

use crate::domain::{MembershipRepository, RoomName};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MembershipRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn MembershipRepository>) -> Self {
        Self { repository }
    }

    /// 現在メンバーがいるルーム名を名前順で返す
    pub async fn execute(&self) -> Vec<RoomName> {
        self.repository.list_rooms().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionId, Username},
        infrastructure::repository::InMemoryMembershipRepository,
    };

    #[tokio::test]
    async fn test_get_rooms_lists_only_non_empty_rooms() {
        // テスト項目: 空になったルームは一覧に含まれない
        // given (前提条件):
        let repository = Arc::new(InMemoryMembershipRepository::default());
        let usecase = GetRoomsUseCase::new(repository.clone());
        repository
            .join(ConnectionId::new("a"), Username::new("A"), RoomName::new("lobby"))
            .await;
        repository
            .join(ConnectionId::new("b"), Username::new("B"), RoomName::new("attic"))
            .await;
        repository.leave(&ConnectionId::new("b")).await;

        // when (操作):
        let rooms = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(rooms, vec![RoomName::new("lobby")]);
    }
}
