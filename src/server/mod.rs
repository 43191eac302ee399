mod chat;
pub mod config;
mod http_layers;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
use chat::make_chat_routes;
pub use server::{make_app, run_server};
