//! Expense Service
//!
//! Adapts repository results to domain outcomes so that handlers never see
//! SQL-specific errors.

use std::sync::Arc;

use crate::domain::{DomainError, Expense, NewExpense};
use crate::store::ExpenseRepository;

/// Service for expense operations
#[derive(Clone)]
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepository>,
}

impl ExpenseService {
    /// Create a new ExpenseService over an injected repository
    pub fn new(repository: Arc<dyn ExpenseRepository>) -> Self {
        Self { repository }
    }

    /// All expenses ordered by ascending id
    pub async fn list_all(&self) -> Result<Vec<Expense>, DomainError> {
        Ok(self.repository.find_all().await?)
    }

    /// A single expense by id
    pub async fn get_by_id(&self, id: &str) -> Result<Expense, DomainError> {
        Ok(self.repository.find_one(id).await?)
    }

    /// Persist a new expense from validated fields
    pub async fn create(&self, new_expense: &NewExpense) -> Result<Expense, DomainError> {
        let expense = self.repository.create(new_expense).await?;

        tracing::info!(expense_id = %expense.id, "Expense created");
        Ok(expense)
    }

    /// Replace an existing expense; a missing row is `DomainError::NotFound`
    pub async fn update_by_id(
        &self,
        id: &str,
        new_expense: &NewExpense,
    ) -> Result<Expense, DomainError> {
        let expense = self.repository.update(id, new_expense).await?;

        tracing::info!(expense_id = %expense.id, "Expense updated");
        Ok(expense)
    }
}
