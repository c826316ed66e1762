//! Checkout session construction
//!
//! Turns an `(artworkId, variant)` pair into a provider-neutral session
//! request. Lookups happen in a fixed order: artwork, availability, then
//! the variant's price.

use std::collections::BTreeMap;

use thiserror::Error;

use atelier_catalog::{to_cents, Catalog, Variant};
use atelier_common::Error;
use atelier_payments::{CheckoutSessionRequest, LineItem, Shipping, ShippingRate};

pub const SUCCESS_PATH: &str = "/shop/success?session_id={CHECKOUT_SESSION_ID}";
pub const CANCEL_PATH: &str = "/shop.html";
pub const SUBMIT_MESSAGE: &str = "Thank you for supporting independent art!";
pub const CURRENCY: &str = "usd";

/// Countries physical prints ship to
pub const SHIPPING_COUNTRIES: [&str; 19] = [
    "US", "CA", "GB", "AU", "NZ", "JP", "DE", "FR", "IT", "ES", "NL", "BE", "SE", "NO", "DK", "FI",
    "IE", "AT", "CH",
];

/// Flat shipping rate for prints, in cents
pub const SHIPPING_AMOUNT: i64 = 1000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    #[error("Missing artworkId or variant")]
    MissingFields,

    #[error("Artwork not found")]
    ArtworkNotFound,

    #[error("Artwork is not available for purchase")]
    Unavailable,

    #[error("Invalid variant or price not set")]
    InvalidVariant,
}

impl From<CheckoutError> for Error {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::ArtworkNotFound => Error::NotFound(err.to_string()),
            other => Error::Validation(other.to_string()),
        }
    }
}

/// Deployment details folded into every session
#[derive(Debug, Clone)]
pub struct CheckoutContext<'a> {
    /// Site origin without a trailing slash
    pub site_url: &'a str,
    pub artist: &'a str,
    pub customer_email: Option<String>,
}

fn standard_shipping() -> Shipping {
    Shipping {
        allowed_countries: SHIPPING_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        rate: ShippingRate {
            display_name: "Standard Shipping".to_string(),
            amount: SHIPPING_AMOUNT,
            currency: CURRENCY.to_string(),
            min_business_days: 5,
            max_business_days: 7,
        },
    }
}

pub fn build_session_request(
    catalog: &Catalog,
    artwork_id: &str,
    variant: &str,
    context: &CheckoutContext<'_>,
) -> Result<CheckoutSessionRequest, CheckoutError> {
    if artwork_id.trim().is_empty() || variant.trim().is_empty() {
        return Err(CheckoutError::MissingFields);
    }

    let artwork = catalog
        .find(artwork_id)
        .ok_or(CheckoutError::ArtworkNotFound)?;
    if !artwork.available {
        return Err(CheckoutError::Unavailable);
    }

    let variant: Variant = variant.parse().map_err(|_| CheckoutError::InvalidVariant)?;
    let unit_amount = artwork
        .pricing
        .price(variant)
        .and_then(to_cents)
        .ok_or(CheckoutError::InvalidVariant)?;

    let images = if artwork.images.og.is_empty() {
        Vec::new()
    } else {
        vec![format!("{}{}", context.site_url, artwork.images.og)]
    };

    let metadata = BTreeMap::from([
        ("artworkId".to_string(), artwork.id.clone()),
        ("variant".to_string(), variant.as_str().to_string()),
        ("artworkTitle".to_string(), artwork.title.clone()),
    ]);
    let mut product_metadata = metadata.clone();
    product_metadata.insert("artist".to_string(), context.artist.to_string());

    Ok(CheckoutSessionRequest {
        line_item: LineItem {
            name: format!("{} - {}", artwork.title, variant.product_label()),
            description: artwork.description.clone(),
            images,
            unit_amount,
            currency: CURRENCY.to_string(),
            quantity: 1,
            product_metadata,
        },
        success_url: format!("{}{}", context.site_url, SUCCESS_PATH),
        cancel_url: format!("{}{}", context.site_url, CANCEL_PATH),
        metadata,
        customer_email: context.customer_email.clone().filter(|e| !e.is_empty()),
        shipping: variant.is_physical().then(standard_shipping),
        billing_address_required: true,
        submit_message: Some(SUBMIT_MESSAGE.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        serde_json::from_value(serde_json::json!({
            "artworks": [
                {"id": "moonlit", "title": "Moonlit", "description": "A moon.",
                 "available": true, "images": {"og": "/images/moonlit-og.jpg"},
                 "pricing": {"digital": 25, "print8x10": 40.5, "print16x20": 0}},
                {"id": "sold", "title": "Sold", "available": false, "pricing": {"digital": 25}},
            ]
        }))
        .unwrap()
    }

    fn context() -> CheckoutContext<'static> {
        CheckoutContext {
            site_url: "https://example.com",
            artist: "Jolene Casko",
            customer_email: None,
        }
    }

    #[test]
    fn test_digital_session() {
        let request = build_session_request(&catalog(), "moonlit", "digital", &context()).unwrap();

        assert_eq!(request.line_item.name, "Moonlit - Digital Download");
        assert_eq!(request.line_item.unit_amount, 2500);
        assert_eq!(request.line_item.currency, "usd");
        assert_eq!(
            request.line_item.images,
            vec!["https://example.com/images/moonlit-og.jpg"]
        );
        assert_eq!(
            request.line_item.product_metadata.get("artist").map(String::as_str),
            Some("Jolene Casko")
        );
        assert_eq!(request.metadata.get("variant").map(String::as_str), Some("digital"));
        assert_eq!(
            request.success_url,
            "https://example.com/shop/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(request.cancel_url, "https://example.com/shop.html");
        assert!(request.shipping.is_none());
        assert!(request.billing_address_required);
        assert_eq!(request.submit_message.as_deref(), Some(SUBMIT_MESSAGE));
    }

    #[test]
    fn test_print_session_adds_shipping() {
        let mut ctx = context();
        ctx.customer_email = Some("buyer@example.com".to_string());
        let request = build_session_request(&catalog(), "moonlit", "print8x10", &ctx).unwrap();

        assert_eq!(request.line_item.name, "Moonlit - 8\"×10\" Print");
        assert_eq!(request.line_item.unit_amount, 4050);
        assert_eq!(request.customer_email.as_deref(), Some("buyer@example.com"));

        let shipping = request.shipping.unwrap();
        assert_eq!(shipping.allowed_countries.len(), 19);
        assert_eq!(shipping.rate.amount, 1000);
        assert_eq!(shipping.rate.display_name, "Standard Shipping");
    }

    #[test]
    fn test_validation_order() {
        let catalog = catalog();
        let ctx = context();
        assert_eq!(
            build_session_request(&catalog, "", "digital", &ctx),
            Err(CheckoutError::MissingFields)
        );
        assert_eq!(
            build_session_request(&catalog, "nope", "poster", &ctx),
            Err(CheckoutError::ArtworkNotFound)
        );
        assert_eq!(
            build_session_request(&catalog, "sold", "poster", &ctx),
            Err(CheckoutError::Unavailable)
        );
        assert_eq!(
            build_session_request(&catalog, "moonlit", "poster", &ctx),
            Err(CheckoutError::InvalidVariant)
        );
        // Zero and missing prices are both unset
        assert_eq!(
            build_session_request(&catalog, "moonlit", "print16x20", &ctx),
            Err(CheckoutError::InvalidVariant)
        );
        assert_eq!(
            build_session_request(&catalog, "moonlit", "print24x36", &ctx),
            Err(CheckoutError::InvalidVariant)
        );
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            Error::from(CheckoutError::ArtworkNotFound).status_code(),
            axum::http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::from(CheckoutError::Unavailable).status_code(),
            axum::http::StatusCode::BAD_REQUEST
        );
    }
}
