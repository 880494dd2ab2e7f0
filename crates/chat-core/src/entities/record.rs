//! Polymorphic Image record
//!
//! A row of the `images` table resolves to one of these variants according
//! to its discriminator. Subtype variants carry the full subtype entity.

use crate::entities::image::{Image, ImageKind};
use crate::entities::{Message, Server, User};
use crate::value_objects::Id;

/// Concrete entity behind an `images` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRecord {
    Image(Image),
    User(User),
    Server(Server),
    Message(Message),
}

impl ImageRecord {
    pub fn id(&self) -> Id {
        self.image().id
    }

    pub fn kind(&self) -> ImageKind {
        self.image().kind
    }

    /// The Image sub-record common to every variant
    pub fn image(&self) -> &Image {
        match self {
            Self::Image(image) => image,
            Self::User(user) => &user.image,
            Self::Server(server) => &server.image,
            Self::Message(message) => &message.image,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn as_server(&self) -> Option<&Server> {
        match self {
            Self::Server(server) => Some(server),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }
}

impl From<User> for ImageRecord {
    fn from(user: User) -> Self {
        Self::User(user)
    }
}

impl From<Server> for ImageRecord {
    fn from(server: Server) -> Self {
        Self::Server(server)
    }
}

impl From<Message> for ImageRecord {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

impl From<Image> for ImageRecord {
    fn from(image: Image) -> Self {
        Self::Image(image)
    }
}
