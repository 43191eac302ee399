use axum::extract::FromRef;

use crate::chat::Chatbot;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedChatbot = Arc<Chatbot>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub chatbot: GuardedChatbot,
}

impl ServerState {
    pub fn new(config: ServerConfig, chatbot: Chatbot) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            chatbot: Arc::new(chatbot),
        }
    }
}

impl FromRef<ServerState> for GuardedChatbot {
    fn from_ref(input: &ServerState) -> Self {
        input.chatbot.clone()
    }
}
