//! In-memory expense repository
//!
//! Test fixture: keeps rows in an ordered map behind an async mutex so the
//! router can be exercised without PostgreSQL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Expense, NewExpense};

use super::{ExpenseRepository, StoreError};

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Expense>,
}

/// Repository that stores expenses in process memory
#[derive(Debug, Default)]
pub struct InMemoryExpenseRepository {
    table: Mutex<Table>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ids that do not parse as integers can never match a row
fn row_key(id: &str) -> Option<i64> {
    id.parse().ok()
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn find_all(&self) -> Result<Vec<Expense>, StoreError> {
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_one(&self, id: &str) -> Result<Expense, StoreError> {
        let table = self.table.lock().await;
        row_key(id)
            .and_then(|key| table.rows.get(&key))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, expense: &NewExpense) -> Result<Expense, StoreError> {
        let mut table = self.table.lock().await;
        table.next_id += 1;
        let key = table.next_id;

        let created = expense.clone().into_expense(key.to_string());
        table.rows.insert(key, created.clone());

        Ok(created)
    }

    async fn update(&self, id: &str, expense: &NewExpense) -> Result<Expense, StoreError> {
        let mut table = self.table.lock().await;
        let row = row_key(id)
            .and_then(|key| table.rows.get_mut(&key))
            .ok_or(StoreError::NotFound)?;

        *row = expense.clone().into_expense(row.id.clone());

        Ok(row.clone())
    }
}
