//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{GetRoomDetailUseCase, GetRoomsUseCase, RoomRouter};

/// Shared application state
pub struct AppState {
    /// RoomRouter（イベント振り分けのユースケース）
    pub room_router: Arc<RoomRouter>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}
