//! Reaction database model

use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub message_id: i64,
    pub user_id: i64,
    #[sqlx(rename = "type")]
    pub reaction_type: String,
}
