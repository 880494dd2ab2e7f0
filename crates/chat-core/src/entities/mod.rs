//! Domain entities - core business objects

mod channel;
mod image;
mod message;
mod reaction;
mod record;
mod server;
mod user;

pub use channel::{Channel, NewChannel};
pub use image::{Image, ImageKind, NewImage};
pub use message::{Message, NewMessage};
pub use reaction::{NewReaction, Reaction};
pub use record::ImageRecord;
pub use server::{NewServer, Server};
pub use user::{NewUser, User};
