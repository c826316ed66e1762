//! Catalog domain: artworks, blog posts, testimonials, site config
//!
//! Everything the site renders is loaded from JSON content files into the
//! types in this crate. Entries are immutable once loaded; views refer to
//! them by index or id.

pub mod domain;
pub mod source;

// Re-export domain types at the crate root for convenience
pub use domain::blog::{BlogIndex, BlogPost, BlogPostLookup, BlogPosts};
pub use domain::entities::*;
pub use domain::format::{format_day, format_month};
pub use domain::site::SiteConfig;
pub use domain::testimonials::{Carousel, Testimonial, Testimonials, CAROUSEL_INTERVAL};

pub use source::{
    load_blog, load_catalog, load_site_config, load_testimonials, ContentError, ContentFile,
    ContentSource, FsContentSource,
};
