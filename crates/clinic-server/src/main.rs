use anyhow::Context;
use clinic_core::ClinicCore;
use clinic_server::{app, telemetry, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;

    let core = if config.is_in_memory() {
        ClinicCore::open_in_memory()
    } else {
        ClinicCore::open(&config.database)
    }
    .with_context(|| format!("opening database {}", config.database))?;
    tracing::info!(database = %config.database, "connected to database");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("clinic-server listening on http://{addr}");

    axum::serve(listener, app(core, config.static_dir.as_deref()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("clinic-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
