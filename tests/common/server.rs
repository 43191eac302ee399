//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own copy of the test dataset.

use super::constants::*;
use super::fixtures::write_test_dataset;
use music_recommender::chat::{Chatbot, DEFAULT_MAX_RESULTS};
use music_recommender::server::{make_app, RequestsLoggingLevel, ServerConfig};
use music_recommender::{build_knowledge_base, create_preference_parser, try_load_dataset, ParserKind};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance backed by the shared test dataset
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    // Private fields - keep resources alive until drop
    _temp_dataset_dir: Option<TempDir>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server over the test dataset with the default parser
    pub async fn spawn() -> Self {
        Self::spawn_with_parser(ParserKind::Substring).await
    }

    pub async fn spawn_with_parser(parser: ParserKind) -> Self {
        let (temp_dir, dataset_path) =
            write_test_dataset().expect("Failed to write test dataset");
        let dataset = try_load_dataset(&dataset_path);
        assert!(dataset.is_some(), "Test dataset did not load");

        let knowledge_base = build_knowledge_base(dataset.as_ref()).map(Arc::new);
        let chatbot = Chatbot::new(
            knowledge_base,
            create_preference_parser(&parser),
            DEFAULT_MAX_RESULTS,
        );
        Self::spawn_chatbot(chatbot, Some(temp_dir)).await
    }

    /// Spawns a server whose dataset could not be loaded
    pub async fn spawn_unavailable() -> Self {
        let chatbot = Chatbot::new(
            None,
            create_preference_parser(&ParserKind::Substring),
            DEFAULT_MAX_RESULTS,
        );
        Self::spawn_chatbot(chatbot, None).await
    }

    async fn spawn_chatbot(chatbot: Chatbot, temp_dataset_dir: Option<TempDir>) -> Self {
        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            frontend_dir_path: None,
        };
        let app = make_app(config, chatbot);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _temp_dataset_dir: temp_dataset_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the /v1/stats endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/v1/stats", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
