//! HTTP client wrapper
//!
//! One shared `reqwest::Client` for the whole run, pointed at the
//! `/api` prefix of the target server. Responses are reduced to status
//! plus parsed JSON body so the checks can assert on both.

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

/// Fallback when `BASE_URL` is not set: the backend's default port.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body; `Null` when the body is empty or not JSON.
    pub body: Value,
}

impl ApiResponse {
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

pub struct ApiClient {
    http: Client,
    api_base: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            api_base: format!("{}/api", base_url.trim_end_matches('/')),
        }
    }

    /// Base URL from the `BASE_URL` environment variable, with a local
    /// fallback default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.execute(self.http.delete(self.url(path))).await
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_prefix_is_appended_once() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.api_base(), "http://localhost:3000/api");
        assert_eq!(client.url("/kendaraan"), "http://localhost:3000/api/kendaraan");
    }

    #[test]
    fn error_message_reads_the_contract_body() {
        let response = ApiResponse {
            status: 404,
            body: json!({ "error": "Kendaraan tidak ditemukan" }),
        };
        assert_eq!(response.error_message(), Some("Kendaraan tidak ditemukan"));

        let empty = ApiResponse { status: 200, body: Value::Null };
        assert_eq!(empty.error_message(), None);
    }
}
