use anyhow::Context;
use clap::Parser;
use console_cmd::ConsoleCmd;
use console_input::console_input_thread;
use futures::{SinkExt, StreamExt};
use msgs::{ClientMsg, ServerMsg, Shape};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

mod console_cmd;
mod console_input;

#[derive(Debug, Parser)]
#[command(name = "client_emulator", about = "Moves the shared shape from the console")]
struct Args {
    #[arg(long, default_value = "ws://127.0.0.1:9080/ws")]
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("client_emulator=info,warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    let (stream, _) = connect_async(args.url.as_str())
        .await
        .with_context(|| format!("could not connect to {}", args.url))?;
    info!("connected to {}", args.url);

    let (mut server_sender, mut server_rcv) = stream.split();

    tokio::spawn(async move {
        while let Some(result) = server_rcv.next().await {
            let msg = match result {
                Ok(msg) => msg,
                Err(e) => {
                    warn!("error receiving from server: {e}");
                    break;
                }
            };
            let Message::Text(text) = msg else { continue };
            match ServerMsg::decode(text.as_str()) {
                Ok(event) => println!("< {event:?}"),
                Err(e) => warn!("{e}"),
            }
        }
        info!("server closed the connection");
    });

    let mut console_receiver = console_input_thread();
    let mut position = Shape::default();
    while let Some(console_str) = console_receiver.recv().await {
        let cmd = match ConsoleCmd::parse(console_str.trim()) {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("err: {err}");
                continue;
            }
        };
        for msg in cmd.to_msgs(position) {
            if let ClientMsg::UpdateModel (shape) = msg {
                position = shape;
            }
            server_sender.send(Message::text(msg.encode()?)).await?;
        }
    }

    Ok(())
}
