//! Dictionary serialization of entities
//!
//! `to_dict` produces a plain JSON object of field name to value. Collections
//! owned by an entity are expanded recursively: a server carries its channels,
//! each channel its messages, each message its reactions. Nothing is paged or
//! depth-limited, so serializing a busy server walks its whole history.

mod trees;

use serde_json::{json, Value};

use crate::entities::{Image, ImageRecord, Reaction};

pub use trees::{ChannelTree, MessageTree, ServerTree, UserTree};

/// Serialize into a plain field-name to value mapping
pub trait ToDict {
    fn to_dict(&self) -> Value;
}

impl<T: ToDict> ToDict for [T] {
    fn to_dict(&self) -> Value {
        Value::Array(self.iter().map(ToDict::to_dict).collect())
    }
}

impl<T: ToDict> ToDict for Vec<T> {
    fn to_dict(&self) -> Value {
        self.as_slice().to_dict()
    }
}

impl ToDict for Image {
    fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "type": self.kind.as_str(),
            "type_id": self.type_id,
            "img_url": self.img_url,
        })
    }
}

impl ToDict for Reaction {
    fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "message_id": self.message_id,
            "user_id": self.user_id,
            "type": self.reaction_type,
        })
    }
}

/// Flat form of whatever the row resolved to. Owned collections are not
/// loaded with a record; use the tree types for the expanded form.
impl ToDict for ImageRecord {
    fn to_dict(&self) -> Value {
        match self {
            Self::Image(image) => image.to_dict(),
            Self::User(user) => json!({
                "id": user.id(),
                "type": user.image.kind.as_str(),
                "img_url": user.image.img_url,
                "username": user.username,
                "email": user.email,
            }),
            Self::Server(server) => json!({
                "id": server.id(),
                "type": server.image.kind.as_str(),
                "img_url": server.image.img_url,
                "name": server.name,
                "DM": server.dm,
                "owner_id": server.owner_id,
            }),
            Self::Message(message) => json!({
                "id": message.id(),
                "type": message.image.kind.as_str(),
                "img_url": message.image.img_url,
                "channel_id": message.channel_id,
                "user_id": message.user_id,
                "text": message.text,
            }),
        }
    }
}
