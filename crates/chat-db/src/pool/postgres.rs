//! PostgreSQL connection pool management
//!
//! Connection settings are read once, by `chat_common::AppConfig::from_env`;
//! this module only turns them into pool options.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Pool options for one database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    /// Pool for `url` with the given size bounds and the standard timeouts
    pub fn new(url: impl Into<String>, max_connections: u32, min_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
            min_connections,
            acquire_timeout: ACQUIRE_TIMEOUT,
            idle_timeout: IDLE_TIMEOUT,
            max_lifetime: MAX_LIFETIME,
        }
    }
}

impl From<&chat_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &chat_common::DatabaseConfig) -> Self {
        Self::new(
            config.url.clone(),
            config.max_connections,
            config.min_connections,
        )
    }
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_standard_timeouts() {
        let config = DatabaseConfig::new("postgresql://localhost/chat", 8, 2);
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_secs(10));
        assert_eq!(config.max_lifetime, Duration::from_secs(1800));
    }

    #[test]
    fn test_pool_sizes_come_from_app_config() {
        let app = chat_common::DatabaseConfig {
            url: "postgresql://chat@db:5432/chat".to_string(),
            max_connections: 4,
            min_connections: 2,
            schema: "chat_production".to_string(),
        };

        let config = DatabaseConfig::from(&app);
        assert_eq!(config, DatabaseConfig::new(app.url.clone(), 4, 2));
        assert_eq!(config.idle_timeout, Duration::from_secs(300));
    }
}
