//! Domain module
//!
//! Expense entity, request payload and domain errors.

pub mod error;
pub mod expense;

pub use error::DomainError;
pub use expense::{Expense, ExpenseRequest, NewExpense};
