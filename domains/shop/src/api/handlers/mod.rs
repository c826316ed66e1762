//! Shop function handlers

pub mod checkout;
pub mod webhook;
