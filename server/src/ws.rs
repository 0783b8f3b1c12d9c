use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use msgs::ClientMsg;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};
use warp::ws::{Message, WebSocket};

use crate::{broadcast_msg::ConnectionId, broadcaster::Broadcaster, session::Session, transport::Relay};

pub async fn connection_process(ws: WebSocket, broadcaster: Arc<Broadcaster<Relay>>, relay: Relay) {
    let (mut ws_sender, mut ws_rcv) = ws.split();
    let id = ConnectionId::new();
    let mut relay_rcv = relay.subscribe();
    let session = Session::new(id, broadcaster);

    info!("{id} connected");

    loop {
        tokio::select! {
            result = relay_rcv.recv() => {
                let broadcast_msg = match result {
                    Ok(msg) => msg,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("{id} fell behind, skipped {skipped} events");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };
                if !broadcast_msg.address.includes(id) {
                    continue;
                }
                if let Err(e) = ws_sender.send(Message::text(&*broadcast_msg.json)).await {
                    error!("error sending websocket msg to {id}: {e}");
                    break;
                }
            }
            result = ws_rcv.next() => {
                let msg = match result {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        warn!("error receiving ws message for {id}: {e}");
                        break;
                    }
                    None => break,
                };
                if msg.is_close() {
                    break;
                }
                let Ok(text) = msg.to_str() else { continue };
                match ClientMsg::decode(text) {
                    Ok(client_msg) => session.handle(client_msg).await,
                    Err(e) => warn!("ignoring message from {id}: {e}"),
                }
            }
        }
    }

    info!("{id} disconnected");
}
