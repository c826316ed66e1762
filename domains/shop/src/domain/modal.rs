//! Checkout modal view-model
//!
//! Lists the purchasable variants of one artwork, tracks the checkout
//! request, and exposes the inline error panel on failure.

use serde::Serialize;
use thiserror::Error;

use atelier_catalog::{format_price, Catalog, Variant};

use super::state::{CheckoutModalEvent, CheckoutModalState, CheckoutModalStateMachine, StateError};

pub const DIGITAL_DESCRIPTION: &str = "High-resolution file, instant delivery";
pub const PRINT_DESCRIPTION: &str = "Premium archival paper, shipped in 5-7 days";
pub const CHECKOUT_FAILED: &str = "Failed to create checkout session";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModalError {
    #[error("Artwork not found")]
    ArtworkNotFound,

    #[error("Unable to load product information. Please refresh the page.")]
    CatalogUnavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantOption {
    pub variant: Variant,
    pub name: &'static str,
    pub description: &'static str,
    pub price: String,
}

/// Inline panel shown when checkout fails
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPanel {
    pub headline: &'static str,
    /// Server error, verbatim
    pub message: String,
    /// Reloads the page
    pub action: &'static str,
}

/// The request the rendering layer should send when a variant is chosen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutIntent {
    pub artwork_id: String,
    pub variant: Variant,
}

#[derive(Debug, Clone)]
pub struct CheckoutModal {
    artwork_id: String,
    title: String,
    options: Vec<VariantOption>,
    state: CheckoutModalState,
}

impl CheckoutModal {
    /// Open for an artwork. `catalog` is `None` when product data failed to load.
    pub fn open(catalog: Option<&Catalog>, artwork_id: &str) -> Result<Self, ModalError> {
        let catalog = catalog.ok_or(ModalError::CatalogUnavailable)?;
        let artwork = catalog
            .find(artwork_id)
            .ok_or(ModalError::ArtworkNotFound)?;

        let options = artwork
            .pricing
            .offered()
            .into_iter()
            .map(|(variant, price)| VariantOption {
                variant,
                name: variant.product_label(),
                description: if variant.is_physical() {
                    PRINT_DESCRIPTION
                } else {
                    DIGITAL_DESCRIPTION
                },
                price: format_price(price),
            })
            .collect();

        Ok(Self {
            artwork_id: artwork.id.clone(),
            title: artwork.title.clone(),
            options,
            state: CheckoutModalState::Selecting,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[VariantOption] {
        &self.options
    }

    pub fn state(&self) -> &CheckoutModalState {
        &self.state
    }

    /// Variant buttons are disabled once a request is in flight
    pub fn options_enabled(&self) -> bool {
        self.state == CheckoutModalState::Selecting
    }

    /// Choose a variant; the returned intent is what to POST
    pub fn choose(&mut self, variant: Variant) -> Result<CheckoutIntent, StateError> {
        if !self.options.iter().any(|o| o.variant == variant) {
            return Err(StateError::GuardFailed(format!(
                "Variant {} is not offered",
                variant
            )));
        }
        self.state =
            CheckoutModalStateMachine::transition(&self.state, CheckoutModalEvent::VariantChosen)?;
        Ok(CheckoutIntent {
            artwork_id: self.artwork_id.clone(),
            variant,
        })
    }

    /// Record the checkout response: a redirect URL or the server's error message.
    /// A success without a URL is shown as a failure.
    pub fn complete(&mut self, result: Result<String, String>) -> Result<(), StateError> {
        let result = match result {
            Ok(url) if url.trim().is_empty() => Err(CHECKOUT_FAILED.to_string()),
            other => other,
        };
        let event = match result {
            Ok(url) => CheckoutModalEvent::SessionCreated { url },
            Err(message) => {
                tracing::error!(artwork_id = %self.artwork_id, %message, "Checkout failed");
                CheckoutModalEvent::SessionFailed { message }
            }
        };
        self.state = CheckoutModalStateMachine::transition(&self.state, event)?;
        Ok(())
    }

    /// URL to navigate to once the session exists
    pub fn redirect_url(&self) -> Option<&str> {
        match &self.state {
            CheckoutModalState::Redirected { url } => Some(url),
            _ => None,
        }
    }

    pub fn error_panel(&self) -> Option<ErrorPanel> {
        match &self.state {
            CheckoutModalState::Failed { message } => Some(ErrorPanel {
                headline: "Unable to process checkout",
                message: message.clone(),
                action: "Try Again",
            }),
            _ => None,
        }
    }
}
