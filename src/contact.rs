use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

/// Body of `POST /api/contact` responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Service => "service",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select a service.")]
    MissingService,
    #[error("Please enter your message.")]
    MissingMessage,
}

impl FieldError {
    pub fn field(self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::InvalidEmail => ContactField::Email,
            Self::MissingService => ContactField::Service,
            Self::MissingMessage => ContactField::Message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("We could not reach the server. Please try again.")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Sending failed (status {0}). Please try again.")]
    Status(u16),
}

/// How a validated submission leaves the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactTransport {
    /// Resolves successfully after a fixed delay; nothing is sent.
    Simulated { latency_ms: u32 },
    /// JSON `POST` to `endpoint`.
    Http { endpoint: String },
}

impl ContactTransport {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Simulated { .. } => "simulated",
            Self::Http { .. } => "http",
        }
    }
}

/// Checks fields in display order and stops at the first failure. Text fields are trimmed
/// in the returned submission; the service value is taken as-is.
pub fn validate(fields: &ContactSubmission) -> Result<ContactSubmission, FieldError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(FieldError::MissingName);
    }

    let email = fields.email.trim();
    if !is_valid_email(email) {
        return Err(FieldError::InvalidEmail);
    }

    if fields.service.is_empty() {
        return Err(FieldError::MissingService);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        return Err(FieldError::MissingMessage);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        service: fields.service.clone(),
        message: message.to_string(),
    })
}

/// `local@domain.tld`: no whitespace, one `@` between non-empty parts, and a dot inside
/// the domain with text on both sides.
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
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Ignored,
    Invalid(FieldError),
    Submitting(ContactSubmission),
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    phase: FormPhase,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => SUBMIT_LABEL,
            FormPhase::Submitting => SENDING_LABEL,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Service => &mut self.fields.service,
            ContactField::Message => &mut self.fields.message,
        };
        *slot = value;
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }

        match validate(&self.fields) {
            Ok(submission) => {
                self.phase = FormPhase::Submitting;
                SubmitOutcome::Submitting(submission)
            }
            Err(error) => SubmitOutcome::Invalid(error),
        }
    }

    /// Returns to idle; a successful send also clears every field.
    pub fn settle(&mut self, result: &Result<(), SubmitError>) {
        if result.is_ok() {
            self.fields = ContactSubmission::default();
        }
        self.phase = FormPhase::Idle;
    }
}
