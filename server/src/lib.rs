use std::{convert::Infallible, sync::Arc};

use warp::{reject::Rejection, Filter, Reply};

use crate::{broadcaster::Broadcaster, transport::Relay};

pub mod broadcast_msg;
pub mod broadcaster;
pub mod config;
pub mod handler;
pub mod session;
pub mod shape_model;
pub mod transport;
pub mod ws;

type Result<T> = std::result::Result<T, Rejection>;

pub fn routes(broadcaster: Arc<Broadcaster<Relay>>, relay: Relay) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let ws_route = warp::path("ws")
        .and(warp::path::end())
        .and(warp::ws())
        .and(with_broadcaster(broadcaster))
        .and(with_relay(relay))
        .and_then(handler::ws_handler);

    let health_route = warp::path("health")
        .and(warp::path::end())
        .and_then(handler::health_handler);

    let index_route = warp::path::end()
        .and(warp::get())
        .and_then(handler::index_handler);

    index_route
        .or(health_route)
        .or(ws_route)
        .with(warp::cors().allow_any_origin())
}

fn with_broadcaster(broadcaster: Arc<Broadcaster<Relay>>) -> impl Filter<Extract = (Arc<Broadcaster<Relay>>,), Error = Infallible> + Clone {
    warp::any().map(move || broadcaster.clone())
}

fn with_relay(relay: Relay) -> impl Filter<Extract = (Relay,), Error = Infallible> + Clone {
    warp::any().map(move || relay.clone())
}
