use std::sync::Arc;

use abaqus_assistant::config::AppConfig;
use abaqus_assistant::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::load().unwrap_or_default();
    let listen_addr = config.listen_addr.clone();
    let state = Arc::new(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!("listening on {}", listen_addr);
    axum::serve(listener, abaqus_assistant::app(state)).await?;
    Ok(())
}
