//! Router construction and server loop.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::ServerConfig, error::ServerError};

use super::{handler, signal::shutdown_signal, state::AppState};

/// Build the HTTP router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handler::root))
        .route("/health", get(handler::health_check))
        .route("/rooms/create", post(handler::create_room))
        .route("/rooms/join", post(handler::join_room))
        .route("/rooms/{code}", get(handler::get_room))
        .route("/rooms/{code}/start", post(handler::start_game))
        .route("/rooms/{code}/roll", post(handler::roll_dice))
        .route("/chat", post(handler::post_message))
        .route("/chat/{room_code}", get(handler::list_messages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState::in_memory());
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Ludo World server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server shut down");
    Ok(())
}
