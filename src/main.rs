use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;

use release_relay::{app, config, state, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let args = config::Args::parse();
    let cfg = config::load_config(args.config.as_deref())?;

    telemetry::init(&cfg)?;

    let app_state = state::AppState::new(cfg.clone())?;
    info!(
        source = %cfg.allowlist.source,
        entries = app_state.allowlist.len(),
        "allowlist loaded"
    );

    let router = app::build_router(app_state);

    let addr: SocketAddr = cfg.listen_addr.parse()?;
    info!(%addr, "starting release-relay");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
