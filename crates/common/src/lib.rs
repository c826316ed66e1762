//! Shared utilities, configuration, and error handling for Atelier
//!
//! This crate provides common functionality used across the Atelier workspace:
//! - Configuration management following 12-factor principles
//! - The HTTP-facing error type and its JSON body
//! - A validating JSON extractor for function handlers
//! - HMAC signing helpers for webhook verification

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;
pub mod state;

pub use config::Config;
pub use crypto::{constant_time_eq, hmac_sha256_hex};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use state::StateError;
