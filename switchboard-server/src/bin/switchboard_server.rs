//! Signaling server binary entry point.
//!
//! Coordinates peer-to-peer call negotiation: room presence plus
//! offer/answer/ICE relay. Media never passes through this process.
//!
//! # Usage
//!
//! ```bash
//! # Listen on the default 0.0.0.0:3000
//! cargo run --bin switchboard-server
//!
//! # Pin the bind address and the allowed browser origin
//! cargo run --bin switchboard-server -- \
//!   --host 127.0.0.1 --port 8443 \
//!   --client-origin https://calls.example.com
//! ```

use clap::Parser;
use switchboard_server::{ServerConfig, SignalingServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the WebSocket listener on
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000, env = "PORT")]
    port: u16,

    /// Exact allowed client origin (any origin when unset)
    #[arg(long, env = "CLIENT_URL")]
    client_origin: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        client_origin: args.client_origin,
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        client_origin = ?config.client_origin,
        "Switchboard signaling server starting"
    );

    SignalingServer::new(config).serve(shutdown_signal()).await?;

    info!("Signaling server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
