//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChannelRepository, ImageRepository, MessageRepository, ReactionRepository, RepoResult,
    ServerRepository, UserRepository,
};
