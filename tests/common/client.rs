//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per recommender endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use music_recommender::chat::ChatReply;
use reqwest::Response;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Deserialize)]
struct ChatResponse {
    reply: ChatReply,
}

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Chat Endpoint
    // ========================================================================

    /// POST /chat with `{"message": message}`
    pub async fn chat(&self, message: &str) -> Response {
        self.client
            .post(format!("{}/chat", self.base_url))
            .json(&json!({ "message": message }))
            .send()
            .await
            .expect("Chat request failed")
    }

    /// POST /chat and decode the reply, asserting a 200 response
    pub async fn chat_reply(&self, message: &str) -> ChatReply {
        let response = self.chat(message).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: ChatResponse = response.json().await.expect("Invalid chat response");
        body.reply
    }

    /// POST /chat with a raw body and content type
    pub async fn chat_raw(&self, body: &'static str, content_type: &str) -> Response {
        self.client
            .post(format!("{}/chat", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .expect("Chat request failed")
    }

    // ========================================================================
    // Stats Endpoint
    // ========================================================================

    /// GET /v1/stats
    pub async fn stats(&self) -> serde_json::Value {
        self.client
            .get(format!("{}/v1/stats", self.base_url))
            .send()
            .await
            .expect("Stats request failed")
            .json()
            .await
            .expect("Invalid stats response")
    }
}
