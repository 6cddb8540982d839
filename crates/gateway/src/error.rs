// Dependency error type
//
// Failures talking to the cache or the database. Handlers log these and answer
// with a generic 500; the health probe downgrades them to "unhealthy".

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum DependencyError {
    /// Redis transport or command error
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Postgres pool or query error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The call did not finish in time
    #[error("{component} timed out after {elapsed:?}")]
    Timeout {
        component: &'static str,
        elapsed: Duration,
    },

    /// Anything else reported by a store implementation
    #[error("{component} unavailable: {reason}")]
    Unavailable {
        component: &'static str,
        reason: String,
    },
}

impl DependencyError {
    pub fn unavailable(component: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            component,
            reason: reason.into(),
        }
    }
}
