//! Outbound email relay.
//!
//! The contact workflow hands one [`RelayRequest`] per submission to an
//! [`EmailRelay`]. The relay either succeeds or reports a numeric status,
//! which is classified into a [`RelayError`]. A status of 0 means the request
//! never got an HTTP response at all.
//!
//! [`EmailJsRelay`] speaks the EmailJS REST contract:
//!
//! ```text
//! POST https://api.emailjs.com/api/v1.0/email/send
//! {
//!   "service_id": "...", "template_id": "...", "user_id": "<public key>",
//!   "template_params": { "from_name", "from_email", "subject", "message", "to_name" }
//! }
//! ```
//!
//! No timeout and no retry are applied; failure is whatever the call resolves to.

use serde::Serialize;
use std::future::Future;
use thiserror::Error;

/// Default EmailJS send endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Relay failure, classified by reported status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Invalid form data. Please check your inputs and try again.")]
    MalformedRequest,
    #[error(
        "Email service is temporarily unavailable. Please try again later or contact me directly."
    )]
    Unavailable,
    #[error("Network error. Please check your connection and try again.")]
    NetworkUnreachable,
    #[error("Failed to send message. Please try again or contact me directly.")]
    Unknown(u16),
}

impl RelayError {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => RelayError::MalformedRequest,
            403 => RelayError::Unavailable,
            0 => RelayError::NetworkUnreachable,
            other => RelayError::Unknown(other),
        }
    }

    /// The status this error was classified from.
    pub fn status(&self) -> u16 {
        match self {
            RelayError::MalformedRequest => 400,
            RelayError::Unavailable => 403,
            RelayError::NetworkUnreachable => 0,
            RelayError::Unknown(status) => *status,
        }
    }
}

/// Template variables substituted into the relay's email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

/// One logical send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    /// Public key; the relay calls it `user_id`.
    pub user_id: String,
    pub template_params: TemplateParams,
}

/// Anything that can deliver a [`RelayRequest`].
pub trait EmailRelay {
    fn send(&self, request: &RelayRequest) -> impl Future<Output = Result<(), RelayError>>;
}

/// HTTP relay against the EmailJS REST API.
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EmailRelay for EmailJsRelay {
    #[tracing::instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "relay request failed before a response");
                RelayError::from_status(e.status().map(|s| s.as_u16()).unwrap_or(0))
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "relay accepted message");
            Ok(())
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<unreadable body>"));
            tracing::warn!(status = status.as_u16(), body = %body, "relay rejected message");
            Err(RelayError::from_status(status.as_u16()))
        }
    }
}
