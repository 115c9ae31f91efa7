use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use media_codec::{api::create_router, ApplicationBuilder, Config};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with structured logging
    init_tracing();

    info!("Starting media codec service");

    // Load configuration
    let config = Config::load()?;
    config.validate()?;
    info!(
        max_upload_bytes = config.max_upload_bytes,
        "Configuration loaded and validated"
    );

    let listen_addr = config.listen_addr.clone();

    // Storage, codecs and use cases
    let state = ApplicationBuilder::new(config)
        .with_storage()
        .await?
        .build()?;

    let app = create_router(state);

    // Start server
    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
