//! SEO function handlers

pub mod sitemap;
