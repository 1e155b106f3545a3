use std::future::Future;
use std::sync::Arc;

use poem::{listener::TcpListener, Server};
use sea_orm::DatabaseConnection;

use crate::api;
use crate::app_data::AppData;
use crate::config::{migrate_database, BootstrapSettings};

/// Bring the schema up to date and serve the API until shutdown
pub async fn serve(
    db: DatabaseConnection,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::new(db));
    let app = api::routes(app_data, settings.api_prefix());

    let address = settings.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);
    tracing::info!("API endpoints available at http://{}{}", address, settings.api_prefix());

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(app, wait_for_shutdown(tokio::signal::ctrl_c()), None)
        .await?;

    Ok(())
}

/// Resolve once the shutdown signal fires
///
/// If the signal handler cannot be installed this never resolves, so the
/// server keeps running instead of stopping right after start.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_completes_on_signal() {
        let result =
            tokio::time::timeout(Duration::from_secs(1), wait_for_shutdown(async { Ok(()) })).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shutdown_waits_when_signal_handler_fails() {
        let failing = async { Err(std::io::Error::other("signal handler unavailable")) };

        let result = tokio::time::timeout(Duration::from_millis(50), wait_for_shutdown(failing)).await;

        assert!(result.is_err());
    }
}
