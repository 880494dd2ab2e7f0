//! Server database model

use sqlx::FromRow;

/// Database model for servers joined with their image row
#[derive(Debug, Clone, FromRow)]
pub struct ServerModel {
    pub id: i64,
    pub name: String,
    /// Stored in the quoted `"DM"` column
    pub dm: bool,
    pub owner_id: i64,
    pub img_url: String,
}
