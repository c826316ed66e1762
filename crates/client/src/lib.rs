//! Atelier site client
//!
//! Used by the page view-models to talk to the site's own origin:
//! - `HttpContentSource` fetches the JSON content files
//! - `SiteClient` calls the checkout, newsletter and Instagram feed functions
//!
//! Every user action maps to exactly one request. Nothing is retried.

pub mod content;
pub mod functions;

use thiserror::Error;

pub use content::HttpContentSource;
pub use functions::SiteClient;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Request(String),

    /// The function answered with a non-success status.
    /// `message` is the server's `error` field when it sent one.
    #[error("Server returned {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Status { status: u16, message: Option<String> },

    #[error("Invalid response: {0}")]
    Response(String),
}

impl ClientError {
    /// The server's own error message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
