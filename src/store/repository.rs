//! Expense Repository
//!
//! SQL statements and row mapping for the `expenses` table.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::{Expense, NewExpense};

use super::StoreError;

/// Persistence operations on expenses
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// All expenses ordered by ascending id
    async fn find_all(&self) -> Result<Vec<Expense>, StoreError>;

    /// A single expense, `StoreError::NotFound` when no row matches
    async fn find_one(&self, id: &str) -> Result<Expense, StoreError>;

    /// Insert a new row and return it as written
    async fn create(&self, expense: &NewExpense) -> Result<Expense, StoreError>;

    /// Replace every non-id field of an existing row
    async fn update(&self, id: &str, expense: &NewExpense) -> Result<Expense, StoreError>;
}

/// Raw row of the `expenses` table
#[derive(Debug, FromRow)]
struct ExpenseRow {
    id: i32,
    title: String,
    amount: f64,
    note: String,
    tags: Vec<String>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: row.id.to_string(),
            title: row.title,
            amount: row.amount,
            note: row.note,
            tags: row.tags,
        }
    }
}

/// PostgreSQL-backed repository
#[derive(Debug, Clone)]
pub struct PgExpenseRepository {
    pool: PgPool,
}

impl PgExpenseRepository {
    /// Create a new PgExpenseRepository over an established pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for PgExpenseRepository {
    async fn find_all(&self) -> Result<Vec<Expense>, StoreError> {
        let rows: Vec<ExpenseRow> = sqlx::query_as(
            r#"
            SELECT id, title, amount, note, tags
            FROM expenses
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Expense, StoreError> {
        let row: Option<ExpenseRow> = sqlx::query_as(
            r#"
            SELECT id, title, amount, note, tags
            FROM expenses
            WHERE id = CAST($1 AS BIGINT)
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Expense::from).ok_or(StoreError::NotFound)
    }

    async fn create(&self, expense: &NewExpense) -> Result<Expense, StoreError> {
        let row: ExpenseRow = sqlx::query_as(
            r#"
            INSERT INTO expenses (title, amount, note, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, amount, note, tags
            "#,
        )
        .bind(&expense.title)
        .bind(expense.amount)
        .bind(&expense.note)
        .bind(&expense.tags)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Expense {} created", row.id);

        Ok(row.into())
    }

    async fn update(&self, id: &str, expense: &NewExpense) -> Result<Expense, StoreError> {
        let row: Option<ExpenseRow> = sqlx::query_as(
            r#"
            UPDATE expenses
            SET title = $2, amount = $3, note = $4, tags = $5
            WHERE id = CAST($1 AS BIGINT)
            RETURNING id, title, amount, note, tags
            "#,
        )
        .bind(id)
        .bind(&expense.title)
        .bind(expense.amount)
        .bind(&expense.note)
        .bind(&expense.tags)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Expense::from).ok_or(StoreError::NotFound)
    }
}
