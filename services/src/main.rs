use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use tracing::info;
use userdesk_services::{config::Config, routes, telemetry::init_tracing, users::SeededUserSource};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const BUILD_DATE: &str = env!("BUILD_DATE");
const BUILD_COMMIT: &str = env!("BUILD_COMMIT");
const BUILD_BRANCH: &str = env!("BUILD_BRANCH");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init().context("failed to load configuration")?;
    init_tracing(&config)?;
    print_build_info();

    info!(
        environment = %config.environment(),
        server_addr = %config.server_addr(),
        port = %config.port(),
        "Configuration loaded"
    );

    let addr = SocketAddr::from((config.server_addr().parse::<IpAddr>()?, config.port()));
    let app = routes(SeededUserSource::demo(), config);

    info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_build_info() {
    info!("===========================================");
    info!("  Userdesk Services");
    info!("===========================================");
    info!("Build Date:   {BUILD_DATE}");
    info!("Build Commit: {BUILD_COMMIT}");
    info!("Build Branch: {BUILD_BRANCH}");
    info!("===========================================");
}
