//! Remote fetch — one GET per cycle against the status endpoint.
//!
//! The response is kept as untyped JSON (`serde_json::Value`); shape
//! validation happens in `report`, after the transport and decode layers
//! have succeeded. Transport failures, non-200 statuses and undecodable
//! bodies are all distinct, propagated errors — a cycle never continues
//! on a half-fetched result.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::error;

use crate::error::PollError;

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Anything that can produce a raw status report for a fetch window.
/// The poller is generic over this so tests can feed it canned reports.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// Live client for the Practicum homework-status API.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, PollError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        // A zero window start means "from now".
        let timestamp = if from_date == 0 {
            Utc::now().timestamp()
        } else {
            from_date
        };

        let resp = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| {
                error!("Server is not responding: {e}");
                PollError::Transport(e)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            error!("Server is not responding (HTTP {status})");
            return Err(PollError::Server(status));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Json conversion error: {e}");
            PollError::Decode(e)
        })
    }
}
