use std::sync::Arc;

use msgs::ServerMsg;
use tokio::sync::broadcast;
use tracing::error;

use crate::broadcast_msg::{Address, BroadcastMsg};

/// Slow connections that fall this far behind skip the missed events.
const RELAY_CAPACITY: usize = 256;

/// The capability the broadcaster needs from the connection layer.
pub trait Transport: Send + Sync + 'static {
    fn connection_count(&self) -> usize;

    /// Fire-and-forget; delivery problems are the transport's business.
    fn send(&self, address: Address, msg: ServerMsg);
}

impl<T: Transport> Transport for Arc<T> {
    fn connection_count(&self) -> usize {
        (**self).connection_count()
    }

    fn send(&self, address: Address, msg: ServerMsg) {
        (**self).send(address, msg)
    }
}

/// Fans encoded events out to every subscribed websocket connection.
/// Each connection filters on `Address::includes` with its own id.
#[derive(Debug, Clone)]
pub struct Relay {
    tx: broadcast::Sender<BroadcastMsg>,
}

impl Relay {
    pub fn new() -> Relay {
        let (tx, _) = broadcast::channel(RELAY_CAPACITY);
        Relay { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastMsg> {
        self.tx.subscribe()
    }
}

impl Transport for Relay {
    fn connection_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn send(&self, address: Address, msg: ServerMsg) {
        let json = match msg.encode() {
            Ok(json) => json,
            Err(e) => {
                error!("could not encode {msg:?}: {e}");
                return;
            }
        };
        // Err only means nobody is subscribed.
        let _ = self.tx.send(BroadcastMsg { address, json: json.into() });
    }
}
