//! Route definitions for the newsletter function

use axum::{routing::post, Router};

use atelier_common::error::method_not_allowed;

use super::handlers::signup;
use super::middleware::NewsletterState;

pub const SIGNUP_PATH: &str = "/.netlify/functions/newsletter-signup";

/// Create newsletter function routes
pub fn routes() -> Router<NewsletterState> {
    Router::new().route(
        SIGNUP_PATH,
        post(signup::newsletter_signup).fallback(method_not_allowed),
    )
}
