//! Content files over HTTP

use atelier_catalog::{ContentError, ContentFile, ContentSource};

/// Fetches `/content/*.json` from the site origin
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_raw(&self, file: ContentFile) -> Result<String, ContentError> {
        let path = file.url_path();
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Request {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%path, status = status.as_u16(), "Content request failed");
            return Err(ContentError::Status {
                path,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| ContentError::Request {
            path,
            message: e.to_string(),
        })
    }
}
