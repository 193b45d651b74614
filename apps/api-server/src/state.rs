//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{Clock, PostRepository};
use blog_core::services::PostService;
use blog_infra::{DatabaseConfig, InMemoryPostRepository, SystemClock};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let repository = Self::post_repository(db_config).await;

        tracing::info!("Application state initialized");

        Self::with_repository(repository)
    }

    /// State over an explicit repository, stamped by the system clock.
    pub fn with_repository(repository: Arc<dyn PostRepository>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        Self {
            posts: PostService::new(repository, clock),
        }
    }

    #[cfg(feature = "postgres")]
    async fn post_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostRepository::new());
        };

        match DatabaseConnections::init(config).await {
            Ok(connections) => Arc::new(PostgresPostRepository::new(connections.main)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn post_repository(_db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
