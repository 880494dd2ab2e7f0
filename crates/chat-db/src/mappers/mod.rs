//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for database rows. Images go through
//! `TryFrom`, since the discriminator column may hold a value this crate does
//! not know.

mod channel;
mod image;
mod message;
mod reaction;
mod server;
mod user;
