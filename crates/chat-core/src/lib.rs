//! # chat-core
//!
//! Domain layer containing entities, the polymorphic image record, dictionary
//! serialization and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod dict;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use dict::{ChannelTree, MessageTree, ServerTree, ToDict, UserTree};
pub use entities::{
    Channel, Image, ImageKind, ImageRecord, Message, NewChannel, NewImage, NewMessage,
    NewReaction, NewServer, NewUser, Reaction, Server, User,
};
pub use error::DomainError;
pub use traits::{
    ChannelRepository, ImageRepository, MessageRepository, ReactionRepository, RepoResult,
    ServerRepository, UserRepository,
};
pub use value_objects::{Id, IdParseError};
