//! `driftcodec-server`: serve the `/parse-hex` batch endpoint.
//!
//! ```bash
//! driftcodec-server --port 12345
//! driftcodec-server --config driftcodec.yaml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use driftcodec_observability::init_tracing;
use driftcodec_server::{router, AppState, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "driftcodec-server",
    about = "HTTP batch decoder for drifting-buoy telemetry records",
    version
)]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "DRIFTCODEC_CONFIG")]
    config: Option<PathBuf>,
    /// Interface to bind (overrides config and DRIFTCODEC_HOST)
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on (overrides config and DRIFTCODEC_PORT)
    #[arg(short, long)]
    port: Option<u16>,
    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::load(args.config.as_deref())?.apply_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.json_logs {
        config.log.json = true;
    }

    init_tracing(&config.log);

    let addr = config.addr();
    let port = config.port;
    let app = router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!("API Running On Port {port}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
