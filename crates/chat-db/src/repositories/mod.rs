//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chat-core.
//! Each repository handles database operations for a specific domain entity
//! and resolves table names through the [`TableNames`](crate::schema::TableNames)
//! it was built with.

mod cascade;
mod channel;
mod error;
mod graph;
mod image;
mod message;
mod reaction;
mod server;
mod sql;
mod user;

pub(crate) use error::map_db_error;

pub use channel::PgChannelRepository;
pub use image::PgImageRepository;
pub use message::PgMessageRepository;
pub use reaction::PgReactionRepository;
pub use server::PgServerRepository;
pub use user::PgUserRepository;
