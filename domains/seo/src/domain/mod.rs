//! SEO domain model

pub mod share;
pub mod sitemap;
pub mod structured;
