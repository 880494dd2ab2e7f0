//! Message entity - text posted by a user in a channel

use crate::entities::image::{Image, ImageKind};
use crate::value_objects::Id;

/// Message entity, extends [`Image`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub image: Image,
    pub channel_id: Id,
    pub user_id: Id,
    pub text: String,
}

impl Message {
    pub fn new(id: Id, channel_id: Id, user_id: Id, text: String, img_url: String) -> Self {
        Self {
            image: Image::for_subtype(id, ImageKind::Message, img_url),
            channel_id,
            user_id,
            text,
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.image.id
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: Id) -> bool {
        self.user_id == user_id
    }

    /// Replace the message text
    pub fn edit(&mut self, text: String) {
        self.text = text;
    }
}

/// Input for creating a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub channel_id: Id,
    pub user_id: Id,
    pub text: String,
    pub img_url: String,
}

impl NewMessage {
    pub fn new(channel_id: Id, user_id: Id, text: String) -> Self {
        Self {
            channel_id,
            user_id,
            text,
            img_url: String::new(),
        }
    }

    pub fn with_img_url(mut self, img_url: impl Into<String>) -> Self {
        self.img_url = img_url.into();
        self
    }
}
