//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
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

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Entries
    // ========================================================================

    /// GET /api/entries with the given query pairs
    pub async fn list_entries(&self, query: &[(&str, &str)]) -> Response {
        self.client
            .get(self.url("/api/entries"))
            .query(query)
            .send()
            .await
            .expect("List entries request failed")
    }

    /// POST /api/entries
    pub async fn create_entry(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/api/entries"))
            .json(body)
            .send()
            .await
            .expect("Create entry request failed")
    }

    /// GET /api/entries/{id}
    pub async fn get_entry(&self, id: &str) -> Response {
        self.client
            .get(self.url(&format!("/api/entries/{}", id)))
            .send()
            .await
            .expect("Get entry request failed")
    }

    /// PUT /api/entries/{id}
    pub async fn update_entry(&self, id: &str, body: &Value) -> Response {
        self.client
            .put(self.url(&format!("/api/entries/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Update entry request failed")
    }

    /// DELETE /api/entries/{id}
    pub async fn delete_entry(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/api/entries/{}", id)))
            .send()
            .await
            .expect("Delete entry request failed")
    }

    // ========================================================================
    // Misc
    // ========================================================================

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// Creates an entry and returns its id, asserting success.
    pub async fn create_entry_id(&self, body: &Value) -> String {
        let response = self.create_entry(body).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        let body: Value = response.json().await.expect("Invalid JSON body");
        body["data"]["id"]
            .as_str()
            .expect("Missing entry id")
            .to_string()
    }
}
