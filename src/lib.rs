//! Expense API Library
//!
//! Re-exports modules for the server binary and integration testing.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;

pub use config::Config;
pub use domain::{DomainError, Expense, ExpenseRequest, NewExpense};
pub use error::{AppError, AppResult};
