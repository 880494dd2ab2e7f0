//! Channel entity <-> model mapper

use chat_core::entities::Channel;
use chat_core::value_objects::Id;

use crate::models::ChannelModel;

/// Convert ChannelModel to Channel entity
impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel::new(Id::new(model.id), Id::new(model.server_id), model.name)
    }
}
