//! HTTP layer for the newsletter function

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::NewsletterState;
pub use routes::routes;
