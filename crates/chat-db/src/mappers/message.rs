//! Message entity <-> model mapper

use chat_core::entities::Message;
use chat_core::value_objects::Id;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message::new(
            Id::new(model.id),
            Id::new(model.channel_id),
            Id::new(model.user_id),
            model.text,
            model.img_url,
        )
    }
}
