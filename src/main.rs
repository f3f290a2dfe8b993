//! hwstatus — homework review status notifier.
//!
//! Polls the Practicum homework-status endpoint on a fixed interval and
//! relays every review-status change to a Telegram chat. Designed for
//! unattended long-running operation: any cycle failure is reported to
//! the same chat and the loop keeps going until the process is killed.

use anyhow::{bail, Context, Result};
use tracing::info;

mod api;
mod config;
mod error;
mod notify;
mod poller;
mod report;

use api::PracticumClient;
use config::Config;
use notify::TelegramNotifier;
use poller::Poller;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwstatus=info".into()),
        )
        .with_target(false)
        .init();

    info!("hwstatus v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    if !config.check_tokens() {
        bail!("required environment variables are missing, refusing to start");
    }

    let client = PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        config.request_timeout,
    )
    .context("Failed to build the status client")?;

    let notifier = TelegramNotifier::new(&config.telegram_token, &config.telegram_chat_id)
        .context("Failed to build the Telegram notifier")?;

    Poller::new(client, notifier, config.poll_interval).run().await;

    Ok(())
}
