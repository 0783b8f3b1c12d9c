use serde::{Deserialize, Serialize};

use crate::{shape::Shape, MsgError};

/// Events the server pushes to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum ServerMsg {
    UpdateShape (Shape),
    ClientClickedShape,
    ClientDoubleClickedShape,
}

impl ServerMsg {
    pub fn decode(text: &str) -> Result<ServerMsg, MsgError> {
        Ok(serde_json::from_str(text.trim())?)
    }

    pub fn encode(&self) -> Result<String, MsgError> {
        Ok(serde_json::to_string(self)?)
    }
}
