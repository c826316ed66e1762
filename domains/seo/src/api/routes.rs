//! Route definitions for the sitemap function

use axum::{routing::get, Router};

use super::handlers::sitemap;
use super::middleware::SeoState;

pub const SITEMAP_PATH: &str = "/.netlify/functions/generate-sitemap";

/// Create SEO function routes
pub fn routes() -> Router<SeoState> {
    Router::new().route(SITEMAP_PATH, get(sitemap::generate_sitemap))
}
