use std::{fmt, sync::Arc};

use uuid::Uuid;

/// Opaque identity the relay hands out to every websocket connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> ConnectionId {
        ConnectionId(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    All,
    AllExcept (ConnectionId),
}

impl Address {
    pub fn includes(self, connection_id: ConnectionId) -> bool {
        match self {
            Address::All => true,
            Address::AllExcept (excluded) => connection_id != excluded,
        }
    }
}

/// An encoded event on its way to every connection `address` includes.
#[derive(Debug, Clone)]
pub struct BroadcastMsg {
    pub address: Address,
    pub json: Arc<str>,
}
