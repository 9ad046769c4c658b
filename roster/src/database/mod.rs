//! Database connection and management module
//!
//! Provides connection pooling and the repositories for the roster's
//! long-lived records: members, roles, and the chapter profile.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

pub mod chapter_repository;
pub mod member_repository;
pub mod role_repository;

// Re-export repositories for convenience
pub use chapter_repository::ChapterRepository;
pub use member_repository::MemberRepository;
pub use role_repository::RoleRepository;

/// Errors from the storage layer
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Query error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost:5432/roster".to_string()),
            max_connections: std::env::var("DATABASE_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            connection_timeout: Duration::from_secs(30),
        }
    }
}

/// Database connection manager
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// Create a new database manager with the given configuration
    pub async fn new(config: DatabaseConfig) -> Result<Self, DatabaseError> {
        info!(
            "Connecting to database: {}",
            mask_database_url(&config.database_url)
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                e
            })?;

        info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Create a new database manager with default configuration
    pub async fn with_default_config() -> Result<Self, DatabaseError> {
        Self::new(DatabaseConfig::default()).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn member_repository(&self) -> MemberRepository {
        MemberRepository::new(self.pool.clone())
    }

    pub fn role_repository(&self) -> RoleRepository {
        RoleRepository::new(self.pool.clone())
    }

    pub fn chapter_repository(&self) -> ChapterRepository {
        ChapterRepository::new(self.pool.clone())
    }

    /// Test database connectivity
    pub async fn test_connection(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(DatabaseError::from)
    }
}

/// Hide credentials when logging connection strings
fn mask_database_url(url: &str) -> String {
    match url.split_once('@') {
        Some((_, host)) => format!("postgresql://***@{host}"),
        None => url.to_string(),
    }
}
