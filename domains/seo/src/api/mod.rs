//! HTTP layer for the sitemap function

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::SeoState;
pub use routes::routes;
