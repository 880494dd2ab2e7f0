//! Configuration structs

mod app_config;

pub use app_config::{
    is_valid_identifier, AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment,
};
