//! Newsletter function handlers

pub mod signup;
