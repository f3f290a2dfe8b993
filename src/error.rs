//! Everything that can go wrong in one poll cycle.
//!
//! Every variant surfaces to the top-level cycle handler in `poller`;
//! nothing is absorbed on the way up. The handler turns the error into a
//! diagnostic Telegram message and keeps looping.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollError {
    /// The remote answered with a non-200 status.
    #[error("сервер не отвечает (HTTP {0})")]
    Server(StatusCode),

    /// Network-level failure reaching the remote.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("json conversion error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The response parsed, but its shape is wrong.
    #[error("неизвестный тип данных: {0}")]
    Shape(&'static str),

    /// A homework record lacks a required key.
    #[error("ответ API не содержит ключ `{0}`")]
    MissingField(&'static str),

    /// A status code outside the known catalog.
    #[error("неизвестный статус работы `{0}`")]
    UnknownStatus(String),

    /// The Telegram sink refused or failed to deliver a message.
    #[error("failed to deliver notification: {0}")]
    Notify(String),
}
