//! Real-time socket connection helper.
//!
//! Opens the WebSocket transport to the backend's Socket.IO endpoint. Packet
//! framing is left to the caller; this only resolves the address and connects.

use crate::{Endpoint, FacegateError, Result};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

/// Engine.IO v4 websocket transport path.
pub const DEFAULT_SOCKET_PATH: &str = "/socket.io/?EIO=4&transport=websocket";

pub type SocketStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket URL for `endpoint` on the default Socket.IO path.
pub fn socket_url(endpoint: &Endpoint) -> String {
    endpoint.socket_url(DEFAULT_SOCKET_PATH)
}

/// Connect to the backend's real-time socket.
pub async fn connect(endpoint: &Endpoint) -> Result<SocketStream> {
    if endpoint.is_empty_host() {
        return Err(FacegateError::EmptyHost(endpoint.to_string()));
    }
    connect_to(&socket_url(endpoint)).await
}

/// Connect to an already-resolved `ws://` or `wss://` URL.
pub async fn connect_to(url: &str) -> Result<SocketStream> {
    tracing::debug!(target: "facegate::ws", "Connecting to {}", url);
    let (stream, response) = tokio_tungstenite::connect_async(url).await?;
    tracing::info!(target: "facegate::ws", "connected");
    tracing::trace!(target: "facegate::ws", "Handshake status: {}", response.status());
    Ok(stream)
}
