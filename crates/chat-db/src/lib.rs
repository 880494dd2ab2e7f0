//! # chat-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `chat-core`. It handles:
//!
//! - Connection pool management
//! - Table naming and DDL, namespaced per environment
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including cascading deletes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_common::AppConfig;
//! use chat_db::pool::{create_pool, DatabaseConfig};
//! use chat_db::repositories::PgUserRepository;
//! use chat_db::schema::{apply_schema, TableNames};
//! use chat_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
//!     let tables = TableNames::from_config(&config)?;
//!     apply_schema(&pool, &tables).await?;
//!
//!     let user_repo = PgUserRepository::new(pool, tables);
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgChannelRepository, PgImageRepository, PgMessageRepository, PgReactionRepository,
    PgServerRepository, PgUserRepository,
};
pub use schema::{apply_schema, drop_schema, TableNames};
