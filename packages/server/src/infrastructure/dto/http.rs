//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomListDto {
    pub rooms: Vec<String>,
}

/// Response of `GET /api/rooms/{room}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub room: String,
    pub users: Vec<String>,
}
