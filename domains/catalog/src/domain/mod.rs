//! Content data model

pub mod blog;
pub mod entities;
pub mod format;
pub mod site;
pub mod testimonials;
