//! `stripe-webhook` handler
//!
//! Verifies the signature over the raw body before anything is parsed.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};

use atelier_common::{Error, Result};
use atelier_payments::webhook::{construct_event, WebhookError, SIGNATURE_HEADER};

use crate::api::middleware::ShopState;
use crate::domain::orders::process_event;

fn rejected(err: WebhookError) -> Error {
    tracing::warn!(error = %err, "Webhook signature verification failed");
    Error::Validation(format!("Webhook Error: {}", err))
}

pub async fn stripe_webhook(
    State(state): State<ShopState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let secret = state.webhook_secret.as_deref().unwrap_or_default();

    let event = construct_event(&body, signature, secret, chrono::Utc::now().timestamp())
        .map_err(rejected)?;
    tracing::debug!(event_id = %event.id, event_type = %event.event_type, "Webhook received");

    let event = event.classify().map_err(rejected)?;
    process_event(event);

    Ok(Json(json!({ "received": true })))
}
