//! Helper functions shared across the generator

pub mod date;
pub mod url;
