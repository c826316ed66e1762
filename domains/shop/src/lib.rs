//! Shop domain: checkout sessions, payment webhooks, checkout modal

pub mod api;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::checkout::{
    build_session_request, CheckoutContext, CheckoutError, CANCEL_PATH, SHIPPING_COUNTRIES,
    SUBMIT_MESSAGE, SUCCESS_PATH,
};
pub use domain::modal::{CheckoutIntent, CheckoutModal, ErrorPanel, ModalError, VariantOption};
pub use domain::orders::{process_event, OrderKind, SaleNotification, WebhookOutcome};
pub use domain::state::{
    CheckoutModalEvent, CheckoutModalState, CheckoutModalStateMachine, StateError,
};

// Re-export API types
pub use api::routes;
pub use api::ShopState;
