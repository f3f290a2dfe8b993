//! Configuration loaded from the environment.
//!
//! Three required values, mirroring the deployment contract:
//! `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`, `TELEGRAM_CHAT_ID`. Missing
//! variables load as empty strings so that `check_tokens` can report
//! every gap in one pass before the process refuses to start.

use std::time::Duration;

use tracing::error;

use crate::api::ENDPOINT;

/// How long one HTTP request may take before it is abandoned. The single
/// loop has no other way to recover from a stalled remote.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Steady-state poll period, also the post-failure delay.
const RETRY_INTERVAL: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            practicum_token: std::env::var("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: std::env::var("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: std::env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
            endpoint: ENDPOINT.to_string(),
            poll_interval: RETRY_INTERVAL,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Readiness check: true iff all three required values are non-empty.
    /// Logs each missing variable. The caller decides whether to halt;
    /// `main` treats a false result as fatal.
    pub fn check_tokens(&self) -> bool {
        let mut ready = true;
        for (name, value) in [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ] {
            if value.is_empty() {
                error!("Missing required environment variable {name}");
                ready = false;
            }
        }
        ready
    }
}
