//! Notification delivery to the Telegram chat.
//!
//! A delivery failure is never dropped here: it is logged and handed back
//! to the cycle, which decides what to do with it. A silently lost
//! notification is worse than a duplicated one.

use anyhow::{Context, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{error, info};

use crate::error::PollError;

/// The delivery sink the poller talks to. Generic so tests can record
/// messages in memory instead of hitting Telegram.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), PollError>;
}

pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self> {
        let id: i64 = chat_id
            .parse()
            .with_context(|| format!("TELEGRAM_CHAT_ID is not a numeric id: {chat_id:?}"))?;
        Ok(Self {
            bot: Bot::new(bot_token),
            chat_id: ChatId(id),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), PollError> {
        match self.bot.send_message(self.chat_id, text).await {
            Ok(_) => {
                info!("Message sent");
                Ok(())
            }
            Err(e) => {
                error!("Bot was unable to send a message: {e}");
                Err(PollError::Notify(e.to_string()))
            }
        }
    }
}
