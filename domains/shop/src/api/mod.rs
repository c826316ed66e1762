//! HTTP layer for the shop functions

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ShopState;
pub use routes::routes;
