//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, InboundEvent},
    infrastructure::dto::websocket::InboundMessage,
    ui::state::AppState,
    usecase::RoomRouter,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// # Arguments
///
/// * `rx` - Channel receiver fed by the MessagePusher
/// * `sender` - WebSocket sink of this connection
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Spawns a task that decodes inbound frames and dispatches them one at a time.
fn receiver_loop(
    mut receiver: futures_util::stream::SplitStream<WebSocket>,
    router: Arc<RoomRouter>,
    connection_id: ConnectionId,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match InboundMessage::decode(text.as_str()) {
                    Ok(message) => {
                        router
                            .dispatch(&connection_id, InboundEvent::from(message))
                            .await
                    }
                    Err(e) => tracing::warn!("Ignoring frame from '{}': {}", connection_id, e),
                },
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionIdFactory::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    state.room_router.connect(connection_id.clone(), tx).await;

    let (sender, receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = receiver_loop(
        receiver,
        state.room_router.clone(),
        connection_id.clone(),
    );

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.room_router.disconnect(&connection_id).await;
}
