//! SEO domain: sitemap function, JSON-LD structured data, share URLs

pub mod api;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::share::{share_url, SharePlatform, TWITTER_VIA};
pub use domain::sitemap::{escape_xml, ChangeFreq, Sitemap, SitemapUrl, StaticPage, STATIC_PAGES};
pub use domain::structured::{
    artwork_collection_schema, breadcrumb_schema, person_schema, social_meta, MetaTag, PageKind,
};

// Re-export API types
pub use api::routes;
pub use api::SeoState;
