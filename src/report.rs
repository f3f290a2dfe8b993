//! Response validation and status extraction.
//!
//! Pure functions over the untyped report: first the shape check
//! (object with a `homeworks` array), then per-record extraction into the
//! notification text. Both fail loudly; the catalog of verdicts is closed
//! and an unlisted status is an error, not a crash.

use serde_json::Value;
use tracing::error;

use crate::error::PollError;

/// Validate the raw report and return the homework records in the order
/// the remote supplied them.
pub fn validate_report(report: &Value) -> Result<&[Value], PollError> {
    if !report.is_object() {
        error!("Unknown data type: response is not an object");
        return Err(PollError::Shape("response is not an object"));
    }
    // A missing `homeworks` key yields `None`, which fails the array
    // check the same way a wrongly-typed value does.
    match report.get("homeworks").and_then(Value::as_array) {
        Some(homeworks) => Ok(homeworks.as_slice()),
        None => {
            error!("Unknown data type: `homeworks` is not an array");
            Err(PollError::Shape("`homeworks` is not an array"))
        }
    }
}

/// Verdict text for a review status. Exactly three statuses exist.
fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Build the notification text for one homework record.
pub fn describe_status(homework: &Value) -> Result<String, PollError> {
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            error!("API response does not contain required information");
            PollError::MissingField("status")
        })?;
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            error!("API response does not contain required information");
            PollError::MissingField("homework_name")
        })?;

    let verdict = verdict_for(status).ok_or_else(|| {
        error!("Unknown homework status `{status}`");
        PollError::UnknownStatus(status.to_string())
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}
