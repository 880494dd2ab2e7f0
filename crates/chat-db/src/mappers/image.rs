//! Image entity <-> model mapper

use chat_core::entities::Image;
use chat_core::error::DomainError;
use chat_core::value_objects::Id;

use crate::models::ImageModel;

/// Convert ImageModel to Image entity; fails on an unknown discriminator
impl TryFrom<ImageModel> for Image {
    type Error = DomainError;

    fn try_from(model: ImageModel) -> Result<Self, Self::Error> {
        Ok(Image {
            id: Id::new(model.id),
            kind: model.kind()?,
            type_id: model.type_id,
            img_url: model.img_url,
        })
    }
}
