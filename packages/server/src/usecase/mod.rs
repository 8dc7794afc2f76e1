//! UseCase layer: application operations built on the domain traits.

mod error;
mod get_room_detail;
mod get_rooms;
mod room_router;

pub use error::GetRoomDetailError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use room_router::RoomRouter;
