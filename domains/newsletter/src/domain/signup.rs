//! Signup wire types

use serde::{Deserialize, Serialize};
use validator::Validate;

use atelier_mailing::Subscriber;

use super::validation::validate_email;

/// Source recorded when a form doesn't name one
pub const DEFAULT_SOURCE: &str = "website";

/// Body of `POST /.netlify/functions/newsletter-signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_email", message = "Valid email address required"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SignupRequest {
    pub fn into_subscriber(self) -> Subscriber {
        Subscriber {
            email: self.email,
            first_name: self.first_name.unwrap_or_default(),
            source: self
                .source
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_defaults() {
        let req: SignupRequest = serde_json::from_str(r#"{"email": "fan@example.com"}"#).unwrap();
        let subscriber = req.into_subscriber();
        assert_eq!(subscriber.first_name, "");
        assert_eq!(subscriber.source, "website");
    }

    #[test]
    fn test_validation_message() {
        let req: SignupRequest = serde_json::from_str(r#"{"email": "a@b"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let message = errors.field_errors()["email"][0].message.clone().unwrap();
        assert_eq!(message, "Valid email address required");
    }
}
