//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if one
//! is present).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse an environment name, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Namespace that holds every table in production
    #[serde(default = "default_schema")]
    pub schema: String,
}

// Default value functions
fn default_app_name() -> String {
    "chat-schema".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_schema() -> String {
    "public".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            Err(_) => default_env(),
        };

        let schema = env::var("SCHEMA").unwrap_or_else(|_| default_schema());
        if !is_valid_identifier(&schema) {
            return Err(ConfigError::InvalidValue("SCHEMA", schema));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
                schema,
            },
        })
    }

    /// Namespace every table name is qualified with, if any
    ///
    /// Tables are namespaced in production only; other environments use bare
    /// table names.
    #[must_use]
    pub fn table_namespace(&self) -> Option<&str> {
        self.app
            .env
            .is_production()
            .then_some(self.database.schema.as_str())
    }
}

/// Check that a name can be spliced into SQL as an identifier
///
/// Accepts ASCII letters, digits and underscores, not starting with a digit.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(env: Environment) -> AppConfig {
        AppConfig {
            app: AppSettings {
                name: default_app_name(),
                env,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/chat".to_string(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
                schema: "chat_app".to_string(),
            },
        }
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Some(Environment::Production));
        assert_eq!(Environment::parse(" Production "), Some(Environment::Production));
        assert_eq!(Environment::parse("staging"), Some(Environment::Staging));
        assert_eq!(Environment::parse("prod"), None);
    }

    #[test]
    fn test_table_namespace_only_in_production() {
        assert_eq!(config(Environment::Production).table_namespace(), Some("chat_app"));
        assert_eq!(config(Environment::Development).table_namespace(), None);
        assert_eq!(config(Environment::Staging).table_namespace(), None);
    }

    #[test]
    fn test_valid_identifier() {
        assert!(is_valid_identifier("public"));
        assert!(is_valid_identifier("_chat_2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2chat"));
        assert!(!is_valid_identifier("chat;drop"));
        assert!(!is_valid_identifier("chat-app"));
        assert!(!is_valid_identifier(&"a".repeat(64)));
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "chat-schema");
        assert_eq!(default_max_connections(), 20);
        assert_eq!(default_min_connections(), 5);
        assert_eq!(default_schema(), "public");
    }
}
