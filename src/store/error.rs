//! Record Store Errors

/// Errors that can occur in the record store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matches the requested id
    #[error("expense not found")]
    NotFound,

    /// Connectivity, constraint or row decoding failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Check if this error is a missing row
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
