use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use clap::Parser;
use local_ip_address::local_ip;
use server::{broadcaster::Broadcaster, config::Config, transport::Relay};
use tracing::info;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.default_log_directive()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    let relay = Relay::new();
    let broadcaster = Broadcaster::start(relay.clone(), config.broadcast_interval());
    let routes = server::routes(broadcaster, relay);

    let addr = SocketAddr::new(IpAddr::from(Ipv4Addr::UNSPECIFIED), config.port);
    let (addr, server) = warp::serve(routes)
        .try_bind_ephemeral(addr)
        .with_context(|| format!("failed to bind to port {}", config.port))?;

    info!("server started, broadcasting every {:?}", config.broadcast_interval());
    info!("   Local:   http://127.0.0.1:{}", addr.port());
    if let Ok(local_ip) = local_ip() {
        info!("   Network: http://{}:{}", local_ip, addr.port());
    }

    server.await;
    Ok(())
}
