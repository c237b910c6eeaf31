//! Record Store module
//!
//! Persistence of expense rows. The `ExpenseRepository` trait is the seam
//! between the service layer and PostgreSQL.

mod error;
mod memory;
mod repository;

pub use error::StoreError;
pub use memory::InMemoryExpenseRepository;
pub use repository::{ExpenseRepository, PgExpenseRepository};

#[cfg(test)]
pub use repository::MockExpenseRepository;
