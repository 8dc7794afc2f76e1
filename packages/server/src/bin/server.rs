//! Room-scoped WebSocket chat relay.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 3000 --log-level debug
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use hiroba_server::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryMembershipRepository,
    },
    ui::Server,
    usecase::{GetRoomDetailUseCase, GetRoomsUseCase, RoomRouter},
};
use hiroba_shared::{logger::setup_logger, time::SystemClock};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "Room-scoped WebSocket chat relay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HIROBA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Default log level, overridden by RUST_LOG
    #[arg(short = 'l', long, env = "HIROBA_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create Repository (in-memory membership state)
    let repository = Arc::new(InMemoryMembershipRepository::default());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(message_pusher_clients));

    // 3. Create UseCases
    let room_router = Arc::new(RoomRouter::new(
        repository.clone(),
        message_pusher,
        Arc::new(SystemClock),
    ));
    let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(repository.clone()));
    let get_room_detail_usecase = Arc::new(GetRoomDetailUseCase::new(repository));

    // 4. Create and run the server
    let server = Server::new(room_router, get_rooms_usecase, get_room_detail_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
