//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::domain::{Expense, ExpenseRequest, NewExpense};
use crate::error::{AppError, AppResult};

use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthCheck {
    pub message: String,
    pub status: bool,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the expenses router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(store_expense))
        .route("/expenses/:id", get(show_expense).put(update_expense))
}

/// Ids must be integers; anything else is rejected before touching the store
fn parse_id(path: Result<Path<String>, PathRejection>) -> AppResult<String> {
    let Path(id) = path?;

    if id.parse::<i64>().is_err() {
        return Err(AppError::BadRequest("invalid parameter id".to_string()));
    }

    Ok(id)
}

fn bind_and_validate(
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> AppResult<NewExpense> {
    let Json(request) = payload?;

    Ok(NewExpense::try_from(request)?)
}

// =========================================================================
// GET /health-check
// =========================================================================

/// Liveness probe, independent of the store
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        message: "success".to_string(),
        status: true,
    })
}

// =========================================================================
// GET /expenses
// =========================================================================

async fn list_expenses(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let expenses = state.service.list_all().await?;

    Ok(Json(expenses))
}

// =========================================================================
// GET /expenses/:id
// =========================================================================

async fn show_expense(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Expense>> {
    let id = parse_id(path)?;

    let expense = state.service.get_by_id(&id).await?;

    Ok(Json(expense))
}

// =========================================================================
// POST /expenses
// =========================================================================

async fn store_expense(
    State(state): State<AppState>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let new_expense = bind_and_validate(payload)?;

    let expense = state.service.create(&new_expense).await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

// =========================================================================
// PUT /expenses/:id
// =========================================================================

async fn update_expense(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> AppResult<Json<Expense>> {
    let id = parse_id(path)?;
    let new_expense = bind_and_validate(payload)?;

    let expense = state.service.update_by_id(&id, &new_expense).await?;

    Ok(Json(expense))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_integers() {
        let id = parse_id(Ok(Path("42".to_string()))).unwrap();
        assert_eq!(id, "42");
    }

    #[test]
    fn test_parse_id_rejects_non_integers() {
        for raw in ["abc", "1.5", "", "9223372036854775808"] {
            let err = parse_id(Ok(Path(raw.to_string()))).unwrap_err();
            assert_eq!(err.to_string(), "invalid parameter id", "input {raw:?}");
        }
    }

    #[test]
    fn test_bind_and_validate_rejects_invalid_payload() {
        let request = ExpenseRequest {
            title: String::new(),
            amount: Some(10.0),
            note: "n".to_string(),
            tags: vec!["a".to_string()],
        };

        let err = bind_and_validate(Ok(Json(request))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_bind_and_validate_yields_concrete_amount() {
        let request = ExpenseRequest {
            title: "t".to_string(),
            amount: Some(0.0),
            note: "n".to_string(),
            tags: vec!["a".to_string()],
        };

        let new_expense = bind_and_validate(Ok(Json(request))).unwrap();
        assert_eq!(new_expense, NewExpense::new("t", 0.0, "n", vec!["a".to_string()]));
    }

    #[test]
    fn test_bind_and_validate_rejects_missing_amount() {
        let request = ExpenseRequest {
            title: "t".to_string(),
            amount: None,
            note: "n".to_string(),
            tags: vec!["a".to_string()],
        };

        let err = bind_and_validate(Ok(Json(request))).unwrap_err();
        assert_eq!(err.to_string(), "amount: amount is required");
    }

    #[tokio::test]
    async fn test_health_check_body() {
        let Json(body) = health_check().await;
        assert_eq!(
            body,
            HealthCheck {
                message: "success".to_string(),
                status: true
            }
        );
    }
}
