//! Site chrome domain model

pub mod commission;
pub mod instagram;
pub mod navigation;
