//! JSON Response Envelope
//!
//! Every route answers with the same shape:
//! `{"status": "success" | "error", "message"?, "data"?}`.
//! Success bodies are built here; error bodies are built by
//! [`AppError`](crate::error::app_error::AppError)'s `IntoResponse`.

use std::borrow::Cow;

use serde::Serialize;

/// Outcome discriminator of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Response envelope. `message` and `data` are omitted when unset.
#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl Envelope<()> {
    /// Success envelope carrying only a message.
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Success envelope carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    /// Add a message to the envelope.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}
