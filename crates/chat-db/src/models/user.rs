//! User database model

use sqlx::FromRow;

/// Database model for users joined with their image row
#[derive(Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub img_url: String,
}
