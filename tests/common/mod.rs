//! Common test utilities

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub const AUTH_TOKEN: &str = "November 10, 2009";

/// Setup test database - provision the table and clear it
///
/// Returns `None` when `DATABASE_URL` is not set so callers can skip.
pub async fn setup_test_db() -> Option<PgPool> {
    dotenvy::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping database test");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    expense_api::db::verify_connection(&pool)
        .await
        .expect("Database is not reachable");

    expense_api::db::ensure_schema(&pool)
        .await
        .expect("Failed to provision schema");

    sqlx::query("TRUNCATE TABLE expenses RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("Failed to clean up DB");

    Some(pool)
}
