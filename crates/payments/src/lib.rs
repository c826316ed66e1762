//! Atelier Payment Service
//!
//! Creates hosted checkout sessions and verifies provider webhooks:
//! - Stripe Checkout over the REST API for production
//! - Mock payment service for testing and local development
//! - Webhook signature verification and event parsing

pub mod mock;
pub mod stripe;
pub mod webhook;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment configuration error: {0}")]
    Configuration(String),

    #[error("Payment request error: {0}")]
    Request(String),

    #[error("{0}")]
    Provider(String),

    #[error("Payment response error: {0}")]
    Response(String),
}

/// Flat-rate shipping offered for physical orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub display_name: String,
    /// Amount in cents
    pub amount: i64,
    pub currency: String,
    pub min_business_days: u32,
    pub max_business_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipping {
    /// ISO 3166-1 alpha-2 codes
    pub allowed_countries: Vec<String>,
    pub rate: ShippingRate,
}

/// The single product being bought
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    /// Unit price in cents
    pub unit_amount: i64,
    pub currency: String,
    pub quantity: u32,
    pub product_metadata: BTreeMap<String, String>,
}

/// Provider-neutral description of a checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionRequest {
    pub line_item: LineItem,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: BTreeMap<String, String>,
    pub customer_email: Option<String>,
    /// Present for physical goods
    pub shipping: Option<Shipping>,
    pub billing_address_required: bool,
    pub submit_message: Option<String>,
}

/// Created session the buyer is redirected to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Payment service configuration
#[derive(Clone)]
pub struct PaymentConfig {
    /// Payment provider (stripe, mock)
    pub provider: String,
    pub secret_key: Option<String>,
    pub api_base: String,
    /// Signing secret for incoming webhooks
    pub webhook_secret: Option<String>,
}

impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("provider", &self.provider)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl PaymentConfig {
    /// Create payment config from environment variables
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok();

        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let provider = std::env::var("PAYMENT_PROVIDER").unwrap_or_else(|_| {
            if secret_key.is_some() {
                "stripe".to_string()
            } else {
                "mock".to_string()
            }
        });

        let api_base = std::env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_STRIPE_API_BASE.to_string());

        let webhook_secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        if provider == "stripe" && secret_key.is_none() {
            return Err(PaymentError::Configuration(
                "STRIPE_SECRET_KEY is required for Stripe provider".to_string(),
            ));
        }

        Ok(Self {
            provider,
            secret_key,
            api_base,
            webhook_secret,
        })
    }

    /// Mock provider with an optional webhook secret
    pub fn mock(webhook_secret: Option<String>) -> Self {
        Self {
            provider: "mock".to_string(),
            secret_key: None,
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
            webhook_secret,
        }
    }
}

/// Payment service trait for different implementations
#[async_trait::async_trait]
pub trait PaymentService: Send + Sync {
    /// Create a hosted checkout session
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError>;
}

/// Payment service factory
pub struct PaymentServiceFactory;

impl PaymentServiceFactory {
    /// Create payment service based on configuration
    pub fn create(config: PaymentConfig) -> Result<Box<dyn PaymentService>, PaymentError> {
        match config.provider.as_str() {
            "stripe" => {
                tracing::info!("Creating Stripe payment service");
                Ok(Box::new(stripe::StripeClient::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock payment service");
                Ok(Box::new(mock::MockPaymentService::new()))
            }
            provider => Err(PaymentError::Configuration(format!(
                "Unknown payment provider: {}. Supported providers: stripe, mock",
                provider
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let config = PaymentConfig {
            provider: "stripe".to_string(),
            secret_key: Some("sk_test_secret".to_string()),
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
            webhook_secret: Some("whsec_secret".to_string()),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk_test_secret"));
        assert!(!debug.contains("whsec_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_factory_rejects_stripe_without_key() {
        let config = PaymentConfig {
            provider: "stripe".to_string(),
            secret_key: None,
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
            webhook_secret: None,
        };
        assert!(matches!(
            PaymentServiceFactory::create(config),
            Err(PaymentError::Configuration(_))
        ));
    }

    #[test]
    fn test_factory_rejects_unknown_provider() {
        let mut config = PaymentConfig::mock(None);
        config.provider = "paypal".to_string();
        let err = PaymentServiceFactory::create(config).err().unwrap();
        assert!(err.to_string().contains("Unknown payment provider: paypal"));
    }

    #[test]
    fn test_factory_creates_mock() {
        assert!(PaymentServiceFactory::create(PaymentConfig::mock(None)).is_ok());
    }
}
