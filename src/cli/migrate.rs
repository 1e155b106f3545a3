use sea_orm::DatabaseConnection;

use crate::config::{migrate_database, reset_database};

#[derive(Debug, thiserror::Error)]
pub enum ResetError {
    #[error("Refusing to reset the database without --yes")]
    NotConfirmed,
}

/// Run database migrations
///
/// Does not initialize AppData or start the server.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    migrate_database(db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}

/// Drop and re-create every table
///
/// Requires explicit confirmation since all data is lost.
pub async fn reset(db: &DatabaseConnection, confirmed: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !confirmed {
        return Err(ResetError::NotConfirmed.into());
    }

    tracing::warn!("Resetting database, all people and items will be deleted");

    reset_database(db).await?;

    Ok(())
}
