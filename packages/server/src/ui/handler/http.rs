//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{RoomDetailDto, RoomListDto},
    ui::state::AppState,
    usecase::GetRoomDetailError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get names of the rooms that currently have members
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<RoomListDto> {
    let rooms = state.get_rooms_usecase.execute().await;

    Json(RoomListDto {
        rooms: rooms.into_iter().map(|room| room.into_string()).collect(),
    })
}

/// Get the users of one room
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    match state.get_room_detail_usecase.execute(room).await {
        Ok(occupants) => Ok(Json(RoomDetailDto {
            room: occupants.room.into_string(),
            users: occupants
                .usernames
                .into_iter()
                .map(|username| username.into_string())
                .collect(),
        })),
        Err(GetRoomDetailError::RoomNotFound(room)) => {
            tracing::debug!("Room '{}' requested but not found", room);
            Err(StatusCode::NOT_FOUND)
        }
    }
}
