//! User entity <-> model mapper

use chat_core::entities::User;
use chat_core::value_objects::Id;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::new(
            Id::new(model.id),
            model.username,
            model.email,
            model.hashed_password,
            model.img_url,
        )
    }
}
