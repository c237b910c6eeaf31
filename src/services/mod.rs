//! Services module
//!
//! Domain services translating store outcomes into domain results.

mod expense_service;

pub use expense_service::ExpenseService;
