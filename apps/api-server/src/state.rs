//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::ports::ContentRepository;
use folio_infra::mock::MockContentRepository;

#[cfg(feature = "postgres")]
use folio_infra::database::{DatabaseConnections, PostgresContentRepository};

use crate::config::AppConfig;

/// Shared application state.
///
/// Holds the one content repository built at start-up.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentRepository>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentRepository>) -> Self {
        Self { content }
    }

    /// Build the application state with the configured content store.
    pub async fn from_config(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let content: Arc<dyn ContentRepository> = match &config.database {
            Some(db_config) => match DatabaseConnections::init(db_config).await {
                Ok(connections) => {
                    tracing::info!("Serving content from PostgreSQL");
                    Arc::new(PostgresContentRepository::new(connections.main))
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using mock content store.",
                        e
                    );
                    Arc::new(MockContentRepository::new(&config.mock))
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Serving mock content.");
                Arc::new(MockContentRepository::new(&config.mock))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let content: Arc<dyn ContentRepository> = {
            tracing::info!("Running without postgres feature - using mock content store");
            Arc::new(MockContentRepository::new(&config.mock))
        };

        tracing::info!("Application state initialized");

        Self::new(content)
    }
}
