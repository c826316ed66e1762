//! Configuration management following 12-factor app principles
//!
//! Site-wide settings are loaded from environment variables. Provider
//! credentials live next to their providers (`PaymentConfig`, `MailingConfig`).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SITE_URL: &str = "https://jolene.taurustech.me";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Public base URL of the site, without trailing slash
    pub site_url: String,

    /// Directory holding `artworks.json`, `blog-posts.json`, etc.
    pub content_dir: PathBuf,

    /// Comma-separated list of allowed CORS origins, or `*`
    pub cors_allowed_origins: String,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let site_url = env::var("URL")
            .or_else(|_| env::var("SITE_URL"))
            .unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => 8888,
        };

        Ok(Self {
            site_url: normalize_base_url(&site_url),
            content_dir: env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("content")),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "atelier=debug".to_string()),
            port,
        })
    }
}

/// Strip trailing slashes so paths can be appended with `format!("{base}{path}")`
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
