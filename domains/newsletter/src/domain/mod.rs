//! Newsletter domain model

pub mod form;
pub mod signup;
pub mod validation;
