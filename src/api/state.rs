//! Shared application state

use std::sync::Arc;

use crate::services::ExpenseService;

/// State injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub service: ExpenseService,
    /// Expected `Authorization` header value; `None` rejects every request
    pub auth_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(service: ExpenseService, auth_token: Option<String>) -> Self {
        Self {
            service,
            auth_token: auth_token.map(Arc::from),
        }
    }
}
