//! Message database model

use sqlx::FromRow;

/// Database model for messages joined with their image row
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    pub text: String,
    pub img_url: String,
}
