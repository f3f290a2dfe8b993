//! The poll cycle — fetch, validate, extract, notify, sleep, forever.
//!
//! State is one integer: the cursor marking the start of the next fetch
//! window. It is seeded from the clock at construction and advances only
//! after a fully successful cycle, to the time that cycle BEGAN, so that
//! homeworks reviewed while messages were being dispatched land in the
//! next window instead of being skipped. A failed cycle leaves the cursor
//! alone and re-polls the same window after the fixed delay.
//!
//! There is no terminal state. Every error becomes a diagnostic message
//! to the same chat; if even that delivery fails, the failure is logged
//! and the loop sleeps and tries again.

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info};

use crate::api::StatusSource;
use crate::error::PollError;
use crate::notify::Notifier;
use crate::report::{describe_status, validate_report};

pub struct Poller<S, N> {
    source: S,
    notifier: N,
    interval: Duration,
    cursor: i64,
}

impl<S: StatusSource, N: Notifier> Poller<S, N> {
    pub fn new(source: S, notifier: N, interval: Duration) -> Self {
        Self {
            source,
            notifier,
            interval,
            cursor: Utc::now().timestamp(),
        }
    }

    /// One fetch-validate-extract-notify pass. A failure anywhere aborts
    /// the rest of the pass; the cursor moves only on full success.
    async fn run_cycle(&mut self) -> Result<(), PollError> {
        let cycle_start = Utc::now().timestamp();

        let report = self.source.fetch(self.cursor).await?;
        let homeworks = validate_report(&report)?;

        if homeworks.is_empty() {
            info!("No status changes since {}", self.cursor);
        }
        for homework in homeworks {
            let message = describe_status(homework)?;
            self.notifier.send(&message).await?;
        }

        self.cursor = cycle_start;
        Ok(())
    }

    /// One loop iteration without the sleep: run a cycle and, on failure,
    /// always attempt to report it to the chat.
    async fn tick(&mut self) {
        if let Err(err) = self.run_cycle().await {
            error!("Poll cycle failed: {err}");
            let message = format!("Сбой в работе программы: {err}");
            if let Err(notify_err) = self.notifier.send(&message).await {
                error!("Could not report the failure either: {notify_err}");
            }
        }
    }

    pub async fn run(mut self) {
        info!("Polling every {:?}, window starts at {}", self.interval, self.cursor);
        loop {
            self.tick().await;
            sleep(self.interval).await;
        }
    }
}
