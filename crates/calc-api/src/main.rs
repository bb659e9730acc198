use tracing::info;

use calc_api::config::CalcConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_env_filter("calc=debug,info")
        .with_target(false)
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        edition = "2024",
        "Starting calculator service"
    );

    let config = CalcConfig::load().apply_profile();
    let addr = format!("{}:{}", config.server.host, config.server.port);

    info!(%addr, "Configuring web server");

    let app = calc_api::create_app(&config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("🚀 Calculator service starting on {addr}");
    info!("Web server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}
