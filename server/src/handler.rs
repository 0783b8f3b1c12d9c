use std::sync::Arc;

use warp::{http::StatusCode, Reply};

use crate::{broadcaster::Broadcaster, transport::Relay, ws, Result};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub async fn ws_handler(ws: warp::ws::Ws, broadcaster: Arc<Broadcaster<Relay>>, relay: Relay) -> Result<impl Reply> {
    Ok(ws.on_upgrade(move |socket| ws::connection_process(socket, broadcaster, relay)))
}

pub async fn health_handler() -> Result<impl Reply> {
    Ok(StatusCode::OK)
}

pub async fn index_handler() -> Result<impl Reply> {
    Ok(warp::reply::html(INDEX_HTML))
}
