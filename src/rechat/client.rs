use crate::rechat::response::{normalize, ApiError, ApiSuccess};
use reqwest::blocking::Client;
use serde_json::Value;

const DEFAULT_API_BASE: &str = "https://api.rechat.com";

/// Thin client for the lead capture endpoints. One best-effort attempt per
/// call: no retry, no backoff, no explicit timeout.
pub struct RechatClient {
    client: Client,
    base_url: String,
}

impl RechatClient {
    pub fn new() -> Self {
        let base_url =
            std::env::var("RECHAT_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Full webhook URL; the result page echoes it back to the user.
    pub fn webhook_url(&self, channel_id: &str) -> String {
        format!("{}/leads/channels/{}/webhook", self.base_url, channel_id)
    }

    /// `POST /leads/channels/{channelId}/webhook` with the filtered lead
    /// payload. The channel id routes the submission and doubles as the
    /// credential.
    pub fn submit_lead(&self, channel_id: &str, payload: &Value) -> Result<ApiSuccess, ApiError> {
        let endpoint = self.webhook_url(channel_id);
        self.send_json(self.client.post(&endpoint), &endpoint, payload)
    }

    /// `POST /leads/{leadId}/timeline` with an activity body.
    pub fn post_activity(&self, lead_id: &str, payload: &Value) -> Result<ApiSuccess, ApiError> {
        let endpoint = format!("{}/leads/{}/timeline", self.base_url, lead_id);
        self.send_json(self.client.post(&endpoint), &endpoint, payload)
    }

    /// `PUT /leads/{leadId}/assignees` replacing the assignee list.
    pub fn put_assignees(&self, lead_id: &str, assignees: &Value) -> Result<ApiSuccess, ApiError> {
        let endpoint = format!("{}/leads/{}/assignees", self.base_url, lead_id);
        self.send_json(self.client.put(&endpoint), &endpoint, assignees)
    }

    fn send_json(
        &self,
        request: reqwest::blocking::RequestBuilder,
        endpoint: &str,
        payload: &Value,
    ) -> Result<ApiSuccess, ApiError> {
        eprintln!("📤 {endpoint}");

        let response = request
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        eprintln!("📥 {endpoint} -> {status}");
        normalize(status, &text)
    }
}

impl Default for RechatClient {
    fn default() -> Self {
        Self::new()
    }
}
