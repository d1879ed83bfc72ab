use std::sync::Arc;

use product_api::{
    build_app, config::Config, logging, service::InMemoryProductService, AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;

    let product_service = Arc::new(InMemoryProductService::new());
    let bind_socket = config.bind_socket()?;
    let state = AppState::new(config.api_token.clone(), product_service);
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
