//! `generate-sitemap` handler

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::middleware::SeoState;
use crate::domain::sitemap::Sitemap;

const CACHE_CONTROL: &str = "public, max-age=3600";

pub async fn generate_sitemap(State(state): State<SeoState>) -> Response {
    let today = chrono::Utc::now().date_naive();
    let sitemap = Sitemap::build(&state.site_url, &state.catalog, today);
    tracing::debug!(urls = sitemap.urls.len(), "Sitemap generated");

    (
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        sitemap.to_xml(),
    )
        .into_response()
}
