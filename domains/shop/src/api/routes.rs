//! Route definitions for the shop functions

use axum::{routing::post, Router};

use atelier_common::error::method_not_allowed;

use super::handlers::{checkout, webhook};
use super::middleware::ShopState;

pub const CHECKOUT_PATH: &str = "/.netlify/functions/create-checkout-session";
pub const WEBHOOK_PATH: &str = "/.netlify/functions/stripe-webhook";

/// Create shop function routes
pub fn routes() -> Router<ShopState> {
    Router::new()
        .route(
            CHECKOUT_PATH,
            post(checkout::create_checkout_session).fallback(method_not_allowed),
        )
        .route(
            WEBHOOK_PATH,
            post(webhook::stripe_webhook).fallback(method_not_allowed),
        )
}
