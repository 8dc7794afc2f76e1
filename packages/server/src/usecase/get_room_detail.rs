//! UseCase: ルーム詳細取得

use std::sync::Arc;

use crate::domain::{MembershipRepository, RoomName, RoomOccupants};

use super::error::GetRoomDetailError;

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MembershipRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn MembershipRepository>) -> Self {
        Self { repository }
    }

    /// # Returns
    ///
    /// * `Ok(RoomOccupants)` - ルーム名と入室順のユーザー名
    /// * `Err(GetRoomDetailError::RoomNotFound)` - メンバーがいないルーム
    pub async fn execute(&self, room: String) -> Result<RoomOccupants, GetRoomDetailError> {
        let room = RoomName::new(room);
        let usernames = self.repository.room_usernames(&room).await;
        match usernames {
            Some(usernames) => Ok(RoomOccupants { room, usernames }),
            None => Err(GetRoomDetailError::RoomNotFound(room.into_string())),
        }
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
    async fn test_get_room_detail_success() {
        // テスト項目: ルームのユーザー名が入室順で返される
        // given (前提条件):
        let repository = Arc::new(InMemoryMembershipRepository::default());
        let usecase = GetRoomDetailUseCase::new(repository.clone());
        repository
            .join(ConnectionId::new("b"), Username::new("bob"), RoomName::new("lobby"))
            .await;
        repository
            .join(ConnectionId::new("a"), Username::new("alice"), RoomName::new("lobby"))
            .await;

        // when (操作):
        let result = usecase.execute("lobby".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(RoomOccupants {
                room: RoomName::new("lobby"),
                usernames: vec![Username::new("bob"), Username::new("alice")],
            })
        );
    }

    #[tokio::test]
    async fn test_get_room_detail_not_found() {
        // テスト項目: 存在しないルームは RoomNotFound になる（大文字小文字を区別）
        // given (前提条件):
        let repository = Arc::new(InMemoryMembershipRepository::default());
        let usecase = GetRoomDetailUseCase::new(repository.clone());
        repository
            .join(ConnectionId::new("a"), Username::new("alice"), RoomName::new("lobby"))
            .await;

        // when (操作):
        let result = usecase.execute("Lobby".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(GetRoomDetailError::RoomNotFound("Lobby".to_string()))
        );
    }
}
