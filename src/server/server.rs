use anyhow::{Context, Result};
use std::time::Duration;

use tower_http::services::ServeDir;
use tracing::info;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::{log_requests, make_chat_routes, state::ServerState, ServerConfig};
use crate::chat::Chatbot;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub dataset_loaded: bool,
    pub songs_indexed: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn stats(State(state): State<ServerState>) -> impl IntoResponse {
    let knowledge_base = state.chatbot.knowledge_base();
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        dataset_loaded: knowledge_base.is_some(),
        songs_indexed: knowledge_base.map_or(0, |kb| kb.songs_count()),
    };
    Json(stats)
}

pub fn make_app(config: ServerConfig, chatbot: Chatbot) -> Router {
    let state = ServerState::new(config.clone(), chatbot);

    let api_routes: Router = Router::new()
        .route("/stats", get(stats))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(stats))
            .with_state(state.clone()),
    };

    home_router
        .merge(make_chat_routes(state.clone()))
        .nest("/v1", api_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, chatbot: Chatbot) -> Result<()> {
    let port = config.port;
    let app = make_app(config, chatbot);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Could not bind port {}", port))?;
    info!("Ready to serve at port {}!", port);

    Ok(axum::serve(listener, app).await?)
}
