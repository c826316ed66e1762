//! `create-checkout-session` handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use atelier_common::{Error, Result, ValidatedJson};

use crate::api::middleware::ShopState;
use crate::domain::checkout::{build_session_request, CheckoutContext};

/// Request body for creating a checkout session
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing artworkId or variant"))]
    pub artwork_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing artworkId or variant"))]
    pub variant: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckoutQuery {
    /// Prefills the customer email on the hosted page
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutResponse {
    pub session_id: String,
    pub url: String,
}

pub async fn create_checkout_session(
    State(state): State<ShopState>,
    Query(query): Query<CheckoutQuery>,
    ValidatedJson(req): ValidatedJson<CreateCheckoutRequest>,
) -> Result<Json<CreateCheckoutResponse>> {
    let context = CheckoutContext {
        site_url: &state.site_url,
        artist: &state.artist,
        customer_email: query.email,
    };
    let request = build_session_request(&state.catalog, &req.artwork_id, &req.variant, &context)?;

    let session = state
        .payments
        .create_checkout_session(request)
        .await
        .map_err(|e| Error::upstream("Failed to create checkout session", e))?;

    tracing::info!(
        session_id = %session.id,
        artwork_id = %req.artwork_id,
        variant = %req.variant,
        "Checkout session created"
    );

    Ok(Json(CreateCheckoutResponse {
        session_id: session.id,
        url: session.url,
    }))
}
