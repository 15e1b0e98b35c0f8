//! Contact submission workflow.
//!
//! Collects four required fields, validates them, and hands exactly one
//! request per attempt to an [`EmailRelay`].
//!
//! ## Submission Cycle
//!
//! ```text
//! Idle ─submit─▶ Validating ─fail─▶ Settled (error)
//!                     │
//!                     └─ok─▶ Sending ─▶ Settled (success | error)
//! ```
//!
//! [`SubmissionPhase`] is the latch: while a submission is `Sending`, further
//! submit attempts are dropped, not queued. Starting a new attempt clears any
//! previous error and success state. Fields are cleared only on success, so a
//! failed attempt can be retried without retyping.

use crate::config::ContactConfig;
use crate::relay::{EmailRelay, RelayError, RelayRequest, TemplateParams};
use std::str::FromStr;
use thiserror::Error;

/// Minimum trimmed name length, in characters.
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum trimmed message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// User-input defects. Checked in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Name must be at least 2 characters long.")]
    NameTooShort,
    #[error("Message must be at least 10 characters long.")]
    MessageTooShort,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Relay credentials are missing; not retryable within the session.
    #[error("Email service is not configured. Please contact me directly at {fallback}.")]
    Configuration { fallback: String },
    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// A form field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "subject" => Ok(Field::Subject),
            "message" => Ok(Field::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Raw field values, stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

/// Basic `local@domain.tld` shape: exactly one `@`, no whitespace, and a dot
/// in the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate all four fields.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    let name = fields.name.trim();
    let email = fields.email.trim();
    let subject = fields.subject.trim();
    let message = fields.message.trim();

    if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}

/// The submission latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// No submission attempted yet.
    #[default]
    Idle,
    /// A relay call is outstanding.
    Sending,
    /// The last attempt finished, successfully or not.
    Settled,
}

/// Outcome of trying to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin {
    /// A submission is already outstanding; this attempt was dropped.
    Busy,
    /// Validation or configuration failed; the error is set on the form.
    Rejected,
    /// Send this request, then report back via `complete_submission`.
    Ready(RelayRequest),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    phase: SubmissionPhase,
    succeeded: bool,
    error: Option<SubmitError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Sending
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn error(&self) -> Option<&SubmitError> {
        self.error.as_ref()
    }

    /// Store a value verbatim and clear any displayed error or success.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        self.error = None;
        self.succeeded = false;
    }

    pub fn dismiss_success(&mut self) {
        self.succeeded = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Validate and build the relay request, latching the form as `Sending`.
    pub fn begin_submission(&mut self, contact: &ContactConfig) -> Begin {
        if self.is_submitting() {
            tracing::debug!("submission already in progress; dropping attempt");
            return Begin::Busy;
        }
        self.error = None;
        self.succeeded = false;
        self.phase = SubmissionPhase::Sending;

        if let Err(e) = validate(&self.fields) {
            tracing::debug!(error = %e, "contact form failed validation");
            return self.reject(e.into());
        }

        let Some(credentials) = contact.relay.credentials() else {
            tracing::warn!("relay credentials missing; directing user to fallback channel");
            return self.reject(SubmitError::Configuration {
                fallback: contact.fallback_email.clone(),
            });
        };

        let request = RelayRequest {
            service_id: credentials.service_id.to_string(),
            template_id: credentials.template_id.to_string(),
            user_id: credentials.public_key.to_string(),
            template_params: TemplateParams {
                from_name: self.fields.name.trim().to_string(),
                from_email: self.fields.email.trim().to_string(),
                subject: self.fields.subject.trim().to_string(),
                message: self.fields.message.trim().to_string(),
                to_name: contact.recipient_name.clone(),
            },
        };
        Begin::Ready(request)
    }

    /// Record the relay's result. The latch is released last.
    pub fn complete_submission(&mut self, outcome: Result<(), RelayError>) {
        match outcome {
            Ok(()) => {
                tracing::info!("contact message sent");
                self.fields = ContactFields::default();
                self.succeeded = true;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(status = e.status(), error = %e, "contact message failed");
                self.error = Some(e.into());
            }
        }
        self.phase = SubmissionPhase::Settled;
    }

    /// Run a full submission cycle against `relay`.
    ///
    /// Returns `false` when the attempt was dropped because another one is
    /// outstanding.
    pub async fn submit<R: EmailRelay>(&mut self, contact: &ContactConfig, relay: &R) -> bool {
        match self.begin_submission(contact) {
            Begin::Busy => false,
            Begin::Rejected => true,
            Begin::Ready(request) => {
                let outcome = relay.send(&request).await;
                self.complete_submission(outcome);
                true
            }
        }
    }

    fn reject(&mut self, error: SubmitError) -> Begin {
        self.error = Some(error);
        self.phase = SubmissionPhase::Settled;
        Begin::Rejected
    }
}
