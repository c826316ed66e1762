//! Newsletter signup form view-model

use std::time::Duration;

use serde::Serialize;

use super::signup::{SignupRequest, DEFAULT_SOURCE};
use super::validation::is_valid_email;

/// Success messages hide themselves after this long
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_secs(5);

const EMPTY_EMAIL: &str = "Please enter your email address";
const INVALID_EMAIL: &str = "Please enter a valid email address";
const NETWORK_FAILURE: &str = "Something went wrong. Please try again.";
const GENERIC_FAILURE: &str = "Subscription failed";
const GENERIC_SUCCESS: &str = "Thank you for subscribing!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
    /// Set for success messages only
    pub dismiss_after: Option<Duration>,
}

impl FormMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
            dismiss_after: Some(SUCCESS_MESSAGE_TTL),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
            dismiss_after: None,
        }
    }
}

/// Why a submission didn't succeed
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitFailure {
    /// The request never produced a response
    Network,
    /// The function answered with an error, shown verbatim when present
    Rejected(Option<String>),
}

#[derive(Debug, Clone)]
pub struct NewsletterForm {
    source: String,
    submitting: bool,
    message: Option<FormMessage>,
    /// Cleared after a successful signup
    reset: bool,
}

impl NewsletterForm {
    /// `source` is the form's `data-source`, if any
    pub fn new(source: Option<&str>) -> Self {
        Self {
            source: source
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_SOURCE)
                .to_string(),
            submitting: false,
            message: None,
            reset: false,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Subscribing..."
        } else {
            "Subscribe"
        }
    }

    pub fn button_enabled(&self) -> bool {
        !self.submitting
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// True once after a success: the inputs should be cleared
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset)
    }

    /// Validate locally and, if valid, return the request to send.
    /// Returns `None` without any network call on invalid input or while
    /// a request is already in flight.
    pub fn submit(&mut self, email: &str, first_name: &str) -> Option<SignupRequest> {
        if self.submitting {
            return None;
        }

        let email = email.trim();
        if email.is_empty() {
            self.message = Some(FormMessage::error(EMPTY_EMAIL));
            return None;
        }
        if !is_valid_email(email) {
            self.message = Some(FormMessage::error(INVALID_EMAIL));
            return None;
        }

        self.submitting = true;
        self.message = None;
        Some(SignupRequest {
            email: email.to_string(),
            first_name: Some(first_name.to_string()),
            source: Some(self.source.clone()),
        })
    }

    /// Record the function's answer: its success message, or a failure
    pub fn complete(&mut self, result: Result<Option<String>, SubmitFailure>) {
        self.submitting = false;
        self.message = Some(match result {
            Ok(message) => {
                self.reset = true;
                FormMessage::success(message.unwrap_or_else(|| GENERIC_SUCCESS.to_string()))
            }
            Err(SubmitFailure::Network) => FormMessage::error(NETWORK_FAILURE),
            Err(SubmitFailure::Rejected(error)) => {
                FormMessage::error(error.unwrap_or_else(|| GENERIC_FAILURE.to_string()))
            }
        });
    }

    /// Called by the rendering layer when a success message's timer fires
    pub fn dismiss(&mut self) {
        if matches!(&self.message, Some(m) if m.kind == MessageKind::Success) {
            self.message = None;
        }
    }
}
