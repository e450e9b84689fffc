use std::net::SocketAddr;
use std::sync::Arc;

use sandbox_hint_server::{
    app,
    config::AppConfig,
    domain::ai::OpenAiGenerator,
    shutdown::shutdown_signal,
    utils::logging::init_logging,
    AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_logging();

    let config = AppConfig::from_env();
    let generator = Arc::new(OpenAiGenerator::new(config.model.clone()));
    let state = AppState::new(config.clone(), generator);

    let app = app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("invalid SERVER_HOST/SERVER_PORT");
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
