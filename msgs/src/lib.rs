pub mod client_msg;
pub mod server_msg;
pub mod shape;

pub use client_msg::ClientMsg;
pub use server_msg::ServerMsg;
pub use shape::Shape;

#[derive(Debug, thiserror::Error)]
pub enum MsgError {
    #[error("malformed message: {0}")]
    Malformed (#[from] serde_json::Error),
}
