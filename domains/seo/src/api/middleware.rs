//! SEO domain state

use std::sync::Arc;

use axum::extract::FromRef;

use atelier_catalog::Catalog;

#[derive(Clone)]
pub struct SeoState {
    pub catalog: Arc<Catalog>,
    /// Origin prefixed to every sitemap location
    pub site_url: String,
}

impl FromRef<SeoState> for Arc<Catalog> {
    fn from_ref(state: &SeoState) -> Self {
        state.catalog.clone()
    }
}
