//! Domain Error Types
//!
//! Outcomes the service layer reports to the HTTP layer, free of SQL detail.

use thiserror::Error;

use crate::store::StoreError;

/// Domain-level failure of an expense operation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// No expense matches the requested id
    #[error("expense not found")]
    NotFound,

    /// Any other failure, carrying the underlying error text
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    /// Check if this error means the expense does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => DomainError::NotFound,
            StoreError::Database(e) => DomainError::Internal(e.to_string()),
        }
    }
}
