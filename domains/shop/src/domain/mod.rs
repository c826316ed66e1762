//! Shop domain model

pub mod checkout;
pub mod modal;
pub mod orders;
pub mod state;
