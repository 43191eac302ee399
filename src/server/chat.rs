//! Chat API routes

use crate::chat::ChatReply;

use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::{GuardedChatbot, ServerState};

#[derive(Deserialize, Debug)]
struct ChatBody {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: ChatReply,
}

async fn chat(
    State(chatbot): State<GuardedChatbot>,
    Json(payload): Json<ChatBody>,
) -> impl IntoResponse {
    let reply = chatbot.reply(&payload.message);
    debug!(
        "Replied to {:?} with {} songs",
        payload.message,
        reply.songs.len()
    );
    Json(ChatResponse { reply })
}

pub fn make_chat_routes(state: ServerState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .with_state(state)
}
