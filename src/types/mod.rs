// src/types/mod.rs
//! Validated request vocabulary: the wiki domain, the credential and the page id.

use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid wiki domain: {domain} - {reason}")]
    InvalidDomain { domain: String, reason: String },

    #[error("Invalid page id: {0}")]
    InvalidPageId(String),

    #[error("Invalid credential format: {reason}")]
    InvalidCredential { reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Value out of bounds: {value}, expected {min}..={max}")]
    OutOfBounds { value: u32, min: u32, max: u32 },
}
