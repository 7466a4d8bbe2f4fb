// src/services/mod.rs

use std::fmt;

use crate::store::StoreError;

pub mod questions;
pub mod quiz;

/// Outcome tags for service operations. Handlers decide which HTTP status
/// each tag becomes on their endpoint.
#[derive(Debug)]
pub enum ServiceError {
    /// A specific record does not exist.
    NotFound(String),
    /// A read succeeded but selected nothing.
    Empty(String),
    /// The input was rejected before touching the store.
    Invalid(String),
    Store(StoreError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "not found: {}", msg),
            ServiceError::Empty(msg) => write!(f, "empty result: {}", msg),
            ServiceError::Invalid(msg) => write!(f, "invalid input: {}", msg),
            ServiceError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Store(err)
    }
}
