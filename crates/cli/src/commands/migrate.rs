//! Database migration command.
//!
//! Applies the migrations embedded from `crates/site/migrations/`. Safe to
//! run repeatedly; already-applied migrations are skipped.

use super::{CommandError, connect};

/// Run database migrations.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
