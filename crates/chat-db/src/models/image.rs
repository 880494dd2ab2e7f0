//! Image database model

use sqlx::FromRow;

use chat_core::entities::ImageKind;
use chat_core::error::DomainError;

/// Database model for images table
#[derive(Debug, Clone, FromRow)]
pub struct ImageModel {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub image_type: String,
    pub type_id: i64,
    pub img_url: String,
}

impl ImageModel {
    /// Parse the discriminator column
    pub fn kind(&self) -> Result<ImageKind, DomainError> {
        self.image_type.parse()
    }
}
