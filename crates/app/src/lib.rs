//! Atelier application composition root
//!
//! Composes the shop, newsletter and SEO function routers into a single
//! application and wires them to the configured providers.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use atelier_catalog::{load_catalog, load_site_config, Catalog, FsContentSource, SiteConfig};
use atelier_common::config::Config;
use atelier_mailing::{MailingConfig, MailingListService, MailingServiceFactory};
use atelier_newsletter::NewsletterState;
use atelier_payments::{PaymentConfig, PaymentService, PaymentServiceFactory};
use atelier_seo::SeoState;
use atelier_shop::ShopState;

/// Function payloads are small JSON bodies or webhook events
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Everything the function routers share
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<Catalog>,
    pub site: Arc<SiteConfig>,
    pub payments: Arc<dyn PaymentService>,
    pub mailing: Arc<dyn MailingListService>,
    pub webhook_secret: Option<String>,
}

impl AppServices {
    /// Load content from `config.content_dir` and build providers from the environment
    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let source = FsContentSource::new(config.content_dir.clone());

        let catalog = load_catalog(&source)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load catalog: {}", e))?;

        let site = match load_site_config(&source).await {
            Ok(site) => site,
            Err(e) => {
                tracing::warn!(error = %e, "Site config unavailable, using defaults");
                SiteConfig::default()
            }
        };

        let payment_config = PaymentConfig::from_env()?;
        let webhook_secret = payment_config.webhook_secret.clone();
        if webhook_secret.is_none() {
            tracing::warn!("STRIPE_WEBHOOK_SECRET not set, webhook deliveries will be rejected");
        }
        let payments = PaymentServiceFactory::create(payment_config)?;
        let mailing = MailingServiceFactory::create(MailingConfig::from_env())?;

        tracing::info!(artworks = catalog.artworks.len(), "Services initialized");

        Ok(Self {
            catalog: Arc::new(catalog),
            site: Arc::new(site),
            payments: Arc::from(payments),
            mailing: Arc::from(mailing),
            webhook_secret,
        })
    }
}

/// Create the main application router with all routes
pub fn create_app(config: &Config, services: AppServices) -> Router {
    let shop_state = ShopState {
        catalog: services.catalog.clone(),
        payments: services.payments,
        webhook_secret: services.webhook_secret,
        site_url: config.site_url.clone(),
        artist: services.site.site.author.clone(),
    };

    let newsletter_state = NewsletterState {
        mailing: services.mailing,
    };

    let seo_state = SeoState {
        catalog: services.catalog,
        site_url: config.site_url.clone(),
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(atelier_shop::routes().with_state(shop_state))
        .merge(atelier_newsletter::routes().with_state(newsletter_state))
        .merge(atelier_seo::routes().with_state(seo_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// CORS for the function endpoints. `origins` is `*` or a comma-separated list.
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let origins: Vec<&str> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();

    if origins.is_empty() || origins == ["*"] {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::error!(%origin, "Invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        tracing::warn!("All configured CORS origins were invalid; disabling CORS");
        cors
    } else {
        tracing::info!(origins = ?origins, "CORS configured");
        cors.allow_origin(AllowOrigin::list(allowed))
    }
}

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}
