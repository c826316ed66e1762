//! Atelier Mailing List Service
//!
//! Newsletter subscriptions with support for:
//! - Mailchimp Marketing API audiences
//! - A logging fallback while the provider is not configured
//! - Mock service for testing

pub mod mailchimp;
pub mod mock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SERVER_PREFIX: &str = "us1";

/// Tag applied to every signup from the site
pub const SIGNUP_TAG: &str = "website-signup";

#[derive(Error, Debug)]
pub enum MailingError {
    #[error("Mailing configuration error: {0}")]
    Configuration(String),

    #[error("Mailing request error: {0}")]
    Request(String),

    #[error("Member already subscribed")]
    AlreadySubscribed,

    #[error("{title}: {detail}")]
    Provider { title: String, detail: String },
}

/// A newsletter signup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    pub first_name: String,
    /// Where on the site the signup came from
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    /// No provider configured; the signup was only logged
    Pending,
}

/// Mailing list configuration
#[derive(Clone, Default)]
pub struct MailingConfig {
    pub api_key: Option<String>,
    pub list_id: Option<String>,
    pub server_prefix: String,
    /// Overrides `https://<prefix>.api.mailchimp.com`
    pub api_base: Option<String>,
}

impl std::fmt::Debug for MailingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailingConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("list_id", &self.list_id)
            .field("server_prefix", &self.server_prefix)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl MailingConfig {
    /// Create mailing config from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            api_key: non_empty("MAILCHIMP_API_KEY"),
            list_id: non_empty("MAILCHIMP_LIST_ID"),
            server_prefix: non_empty("MAILCHIMP_SERVER_PREFIX")
                .unwrap_or_else(|| DEFAULT_SERVER_PREFIX.to_string()),
            api_base: non_empty("MAILCHIMP_API_BASE"),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.list_id.is_some()
    }

    /// Base URL of the Marketing API
    pub fn api_base(&self) -> String {
        match &self.api_base {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.mailchimp.com", self.server_prefix),
        }
    }
}

/// Mailing list service trait for different implementations
#[async_trait::async_trait]
pub trait MailingListService: Send + Sync {
    async fn subscribe(&self, subscriber: Subscriber) -> Result<SubscribeOutcome, MailingError>;
}

/// Stand-in used until Mailchimp credentials are set
#[derive(Debug, Clone, Default)]
pub struct LoggingMailingList;

#[async_trait::async_trait]
impl MailingListService for LoggingMailingList {
    async fn subscribe(&self, subscriber: Subscriber) -> Result<SubscribeOutcome, MailingError> {
        tracing::warn!(
            email = %subscriber.email,
            first_name = %subscriber.first_name,
            source = %subscriber.source,
            "Mailchimp not configured, newsletter signup logged only"
        );
        Ok(SubscribeOutcome::Pending)
    }
}

/// Mailing list service factory
pub struct MailingServiceFactory;

impl MailingServiceFactory {
    pub fn create(config: MailingConfig) -> Result<Box<dyn MailingListService>, MailingError> {
        if !config.is_configured() {
            tracing::info!("Mailchimp not configured, using logging mailing list");
            return Ok(Box::new(LoggingMailingList));
        }

        tracing::info!("Creating Mailchimp mailing list service");
        Ok(Box::new(mailchimp::MailchimpClient::new(config)?))
    }
}
