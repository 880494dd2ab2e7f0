//! Database models - SQLx-compatible structs for PostgreSQL tables

mod channel;
mod image;
mod message;
mod reaction;
mod server;
mod user;

pub use channel::ChannelModel;
pub use image::ImageModel;
pub use message::MessageModel;
pub use reaction::ReactionModel;
pub use server::ServerModel;
pub use user::UserModel;
