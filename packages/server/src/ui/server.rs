//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::{GetRoomDetailUseCase, GetRoomsUseCase, RoomRouter};

use super::{
    handler::{get_room_detail, get_rooms, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(room_router, get_rooms_usecase, get_room_detail_usecase);
/// server.run("127.0.0.1".to_string(), 3000).await?;
/// ```
pub struct Server {
    /// RoomRouter（イベント振り分けのユースケース）
    room_router: Arc<RoomRouter>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}

impl Server {
    pub fn new(
        room_router: Arc<RoomRouter>,
        get_rooms_usecase: Arc<GetRoomsUseCase>,
        get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    ) -> Self {
        Self {
            room_router,
            get_rooms_usecase,
            get_room_detail_usecase,
        }
    }

    /// Build the axum router with every endpoint mounted
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            room_router: self.room_router,
            get_rooms_usecase: self.get_rooms_usecase,
            get_room_detail_usecase: self.get_room_detail_usecase,
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room}", get(get_room_detail))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the WebSocket chat relay server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "WebSocket chat relay listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
