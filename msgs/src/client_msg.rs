use serde::{Deserialize, Serialize};

use crate::{shape::Shape, MsgError};

/// Calls a client makes on the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", content = "payload", rename_all = "camelCase")]
pub enum ClientMsg {
    UpdateModel (Shape),
    TriggerShapeClick,
    TriggerShapeDoubleClick,
}

impl ClientMsg {
    pub fn decode(text: &str) -> Result<ClientMsg, MsgError> {
        Ok(serde_json::from_str(text.trim())?)
    }

    pub fn encode(&self) -> Result<String, MsgError> {
        Ok(serde_json::to_string(self)?)
    }
}
