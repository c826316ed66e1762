//! Newsletter domain: signup function and signup form view-model

pub mod api;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::form::{
    FormMessage, MessageKind, NewsletterForm, SubmitFailure, SUCCESS_MESSAGE_TTL,
};
pub use domain::signup::{SignupRequest, SignupResponse, DEFAULT_SOURCE};
pub use domain::validation::{is_valid_email, EMAIL_REGEX};

// Re-export API types
pub use api::routes;
pub use api::NewsletterState;
