//! HTTP transport for the three game endpoints.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::protocol::{ErrorDetail, GameStateView, MoveRequest};
use tracing::debug;
use url::Url;

use crate::error::ApiFailure;

const STATE_PATH: &str = "api/state";
const MOVE_PATH: &str = "api/move";
const NEW_GAME_PATH: &str = "api/new_game";

#[async_trait]
pub trait GameApi: Send + Sync {
    async fn fetch_state(&self) -> Result<GameStateView, ApiFailure>;
    async fn submit_move(&self, request: MoveRequest) -> Result<GameStateView, ApiFailure>;
    async fn new_game(&self) -> Result<GameStateView, ApiFailure>;
}

pub struct HttpGameApi {
    http: Client,
    base_url: Url,
}

impl HttpGameApi {
    /// `base_url` should end with `/` so endpoint paths join beneath it.
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiFailure> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn fetch_state(&self) -> Result<GameStateView, ApiFailure> {
        let url = self.endpoint(STATE_PATH)?;
        debug!(%url, "requesting game state");
        let response = self.http.get(url).send().await?;
        decode_state(response).await
    }

    async fn submit_move(&self, request: MoveRequest) -> Result<GameStateView, ApiFailure> {
        let url = self.endpoint(MOVE_PATH)?;
        debug!(%url, row = request.row, col = request.col, "submitting move");
        let response = self.http.post(url).json(&request).send().await?;
        decode_state(response).await
    }

    async fn new_game(&self) -> Result<GameStateView, ApiFailure> {
        let url = self.endpoint(NEW_GAME_PATH)?;
        debug!(%url, "requesting new game");
        let response = self.http.post(url).send().await?;
        decode_state(response).await
    }
}

async fn decode_state(response: Response) -> Result<GameStateView, ApiFailure> {
    let status = response.status();
    if !status.is_success() {
        // An unreadable error body still yields the generic status message.
        let body = response.bytes().await.unwrap_or_default();
        return Err(ApiFailure::Status {
            status: status.as_u16(),
            message: extract_error_message(status, &body),
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| ApiFailure::Decode(err.to_string()))
}

/// Picks the most specific human-readable message from a rejected response:
/// the JSON `detail` field, then the raw body text, then the status line.
pub fn extract_error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        // Any JSON body without a usable string `detail` gets the status line, never the literal.
        return match serde_json::from_value::<ErrorDetail>(value) {
            Ok(ErrorDetail {
                detail: Some(detail),
            }) if !detail.trim().is_empty() => detail,
            _ => generic_status_message(status),
        };
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    generic_status_message(status)
}

fn generic_status_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Server Error: {} {reason}", status.as_u16()),
        None => format!("Server Error: {}", status.as_u16()),
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
