//! `newsletter-signup` handler

use axum::{extract::State, Json};

use atelier_common::{Error, Result, ValidatedJson};
use atelier_mailing::{MailingError, SubscribeOutcome};

use crate::api::middleware::NewsletterState;
use crate::domain::signup::{SignupRequest, SignupResponse};

const SUBSCRIBED: &str = "Successfully subscribed to newsletter!";
const PENDING: &str = "Thank you for subscribing! (Mailchimp configuration pending)";
const ALREADY_SUBSCRIBED: &str = "This email is already subscribed!";
const FAILED: &str = "Failed to subscribe. Please try again later.";

fn signup_error(err: MailingError) -> Error {
    match err {
        MailingError::AlreadySubscribed => Error::Validation(ALREADY_SUBSCRIBED.to_string()),
        MailingError::Provider { detail, .. } if !detail.is_empty() => {
            Error::upstream(FAILED, detail)
        }
        MailingError::Provider { .. } => Error::upstream(FAILED, "Mailchimp error"),
        other => Error::upstream(FAILED, other),
    }
}

pub async fn newsletter_signup(
    State(state): State<NewsletterState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<Json<SignupResponse>> {
    let subscriber = req.into_subscriber();
    let source = subscriber.source.clone();

    let outcome = state
        .mailing
        .subscribe(subscriber)
        .await
        .map_err(signup_error)?;
    let message = match outcome {
        SubscribeOutcome::Subscribed => SUBSCRIBED,
        SubscribeOutcome::Pending => PENDING,
    };
    tracing::info!(%source, "Newsletter signup handled");

    Ok(Json(SignupResponse {
        success: true,
        message: message.to_string(),
    }))
}
