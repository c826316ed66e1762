//! Gallery domain model

pub mod cards;
pub mod filter;
pub mod keys;
pub mod lightbox;
pub mod page;
pub mod state;
pub mod view;
