//! Shop domain state

use std::sync::Arc;

use axum::extract::FromRef;

use atelier_catalog::Catalog;
use atelier_payments::PaymentService;

/// Application state for the shop functions
#[derive(Clone)]
pub struct ShopState {
    pub catalog: Arc<Catalog>,
    pub payments: Arc<dyn PaymentService>,
    /// Signing secret for `stripe-webhook`; deliveries are rejected without one
    pub webhook_secret: Option<String>,
    /// Site origin used for images and redirect URLs
    pub site_url: String,
    /// Attached to every product as metadata
    pub artist: String,
}

impl FromRef<ShopState> for Arc<Catalog> {
    fn from_ref(state: &ShopState) -> Self {
        state.catalog.clone()
    }
}
