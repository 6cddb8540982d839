// Relational database liveness
// Decision: The gateway never reads or writes tables; it only proves the database answers

use crate::error::DependencyError;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Liveness primitive of the relational store
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Issue a trivial query.
    async fn ping(&self) -> Result<(), DependencyError>;
}

/// Postgres pool used only for the liveness query
pub struct PostgresProbe {
    pool: PgPool,
}

impl PostgresProbe {
    /// Build the pool without connecting; connections open on first query.
    pub fn connect_lazy(database_url: &str, acquire_timeout: Duration) -> Result<Self, DependencyError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DatabaseProbe for PostgresProbe {
    async fn ping(&self) -> Result<(), DependencyError> {
        sqlx::query("SELECT NOW()").execute(&self.pool).await?;
        Ok(())
    }
}

/// Stand-in for dev mode: always reachable
#[derive(Debug, Default, Clone, Copy)]
pub struct InMemoryDatabase;

#[async_trait]
impl DatabaseProbe for InMemoryDatabase {
    async fn ping(&self) -> Result<(), DependencyError> {
        Ok(())
    }
}
