//! Expense entity and request payload

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// A persisted expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier, immutable after creation
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub note: String,
    /// Order is preserved through the store
    pub tags: Vec<String>,
}

/// Create/update payload for an expense
///
/// Missing fields deserialize to empty values so that their absence is
/// reported by validation rather than by JSON binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExpenseRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(required(message = "amount is required"))]
    pub amount: Option<f64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "note is required"))]
    pub note: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "tags must contain at least one entry"))]
    pub tags: Vec<String>,
}

/// Validated expense fields, ready to be written by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

impl NewExpense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        note: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            note: note.into(),
            tags,
        }
    }

    /// Materialize the fields as an expense with the given id
    pub fn into_expense(self, id: impl Into<String>) -> Expense {
        Expense {
            id: id.into(),
            title: self.title,
            amount: self.amount,
            note: self.note,
            tags: self.tags,
        }
    }
}

impl TryFrom<ExpenseRequest> for NewExpense {
    type Error = ValidationErrors;

    fn try_from(request: ExpenseRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let ExpenseRequest {
            title,
            amount,
            note,
            tags,
        } = request;

        let amount = amount.ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.add("amount", ValidationError::new("required"));
            errors
        })?;

        Ok(Self {
            title,
            amount,
            note,
            tags,
        })
    }
}
