//! Gallery domain: filter index, lightbox, and the gallery page view-model
//!
//! The portfolio page is modelled as explicit state owned by a single
//! [`GalleryPage`]. A rendering layer reads the projections it exposes
//! (cards, filter bar, lightbox view) and forwards user input back to it.

pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::cards::{
    home_cards, portfolio_cards, product_cards, PortfolioCard, ProductBadge, ProductCard,
};
pub use domain::filter::{
    announcement, apply_filter, EmptyNotice, FilterBar, FilterButton, FilterKey, VisibleSet,
    EMPTY_NOTICE,
};
pub use domain::keys::NavKey;
pub use domain::lightbox::{KeyOutcome, Lightbox};
pub use domain::page::{Focus, GalleryPage, LoadFailure, PageContent, LOAD_FAILURE};
pub use domain::state::{
    CloseTrigger, LightboxEvent, LightboxGuardContext, LightboxState, LightboxStateMachine,
    StateError,
};
pub use domain::view::{
    full_image_url, price_rows, Availability, LightboxView, Navigation, PriceList, PriceRow,
};
