//! Contact form rules and submission status
//!
//! The generated page validates the form in the browser with the same rules.
//! [`EMAIL_PATTERN`], [`MIN_MESSAGE_LENGTH`] and every [`FieldError`] message
//! are emitted into the markup, so the script only carries the checks.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Email address pattern (case-insensitive)
pub const EMAIL_PATTERN: &str = r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

/// Minimum number of characters in a message
pub const MIN_MESSAGE_LENGTH: usize = 10;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(&format!("(?i){}", EMAIL_PATTERN)).expect("Invalid email regex")
    })
}

/// Check an address against [`EMAIL_PATTERN`]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Subject => write!(f, "subject"),
            Field::Message => write!(f, "message"),
        }
    }
}

/// A single failed rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least {0} characters")]
    MessageTooShort(usize),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
            FieldError::MessageTooShort(_) => Field::Message,
        }
    }
}

/// Values entered into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check every field
    ///
    /// # Returns
    /// * `Ok(())` - All rules pass
    /// * `Err(Vec<FieldError>)` - Every failed rule, in field order
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !is_valid_email(self.email.trim()) {
            errors.push(FieldError::InvalidEmail);
        }

        if self.subject.trim().is_empty() {
            errors.push(FieldError::Required(Field::Subject));
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError::Required(Field::Message));
        } else if self.message.chars().count() < MIN_MESSAGE_LENGTH {
            errors.push(FieldError::MessageTooShort(MIN_MESSAGE_LENGTH));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Clear every field, as after a successful submission
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Form submission status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Submission attempted while a previous one is still in flight
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("A submission is already in progress")]
pub struct AlreadySubmitting;

impl SubmissionStatus {
    /// Start a submission from any settled state
    pub fn begin(&mut self) -> Result<(), AlreadySubmitting> {
        if *self == SubmissionStatus::Submitting {
            return Err(AlreadySubmitting);
        }
        *self = SubmissionStatus::Submitting;
        Ok(())
    }

    /// Settle an in-flight submission; ignored when nothing is in flight
    pub fn finish(&mut self, succeeded: bool) {
        if *self == SubmissionStatus::Submitting {
            *self = if succeeded {
                SubmissionStatus::Success
            } else {
                SubmissionStatus::Error
            };
        }
    }

    pub fn reset(&mut self) {
        *self = SubmissionStatus::Idle;
    }

    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }

    /// Value of the form's `data-status` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }
}
