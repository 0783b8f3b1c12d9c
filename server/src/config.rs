use std::time::Duration;

use clap::Parser;

pub const DEFAULT_PORT: u16 = 9080;

#[derive(Debug, Clone, Parser)]
#[command(name = "server", about = "Relays a shared shape between websocket clients")]
pub struct Config {
    /// Port to listen on, on all interfaces
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// How often the latest shape is pushed to clients
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..))]
    pub broadcast_interval_ms: u64,

    #[arg(long)]
    pub debug: bool,
}

impl Config {
    pub fn broadcast_interval(&self) -> Duration {
        Duration::from_millis(self.broadcast_interval_ms)
    }

    /// Used when RUST_LOG is not set.
    pub fn default_log_directive(&self) -> &'static str {
        if self.debug {
            "server=debug,info"
        } else {
            "server=info,warn"
        }
    }
}
