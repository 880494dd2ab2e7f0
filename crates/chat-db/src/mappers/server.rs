//! Server entity <-> model mapper

use chat_core::entities::Server;
use chat_core::value_objects::Id;

use crate::models::ServerModel;

/// Convert ServerModel to Server entity
impl From<ServerModel> for Server {
    fn from(model: ServerModel) -> Self {
        Server::new(
            Id::new(model.id),
            model.name,
            model.dm,
            Id::new(model.owner_id),
            model.img_url,
        )
    }
}
