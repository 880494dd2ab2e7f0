//! Cascading deletes
//!
//! Subtype rows share their primary key with an `images` row, and the foreign
//! keys only cascade from the base row downwards. Removing a user, server,
//! channel or message therefore starts at the `images` table: every image row
//! whose subtype row would disappear is deleted in the same statement, and
//! `ON DELETE CASCADE` takes care of subtype rows, channels and reactions.
//!
//! Each function runs inside the caller's transaction and returns the number
//! of rows removed from the table it starts at. Zero means the root entity
//! did not exist.

use sqlx::PgConnection;

use chat_core::traits::RepoResult;
use chat_core::value_objects::Id;

use crate::schema::TableNames;

use super::error::map_db_error;

/// Images owned by a user: its own row, its servers, every message it wrote
/// and every message posted in one of its servers
pub(crate) fn user_images_sql(t: &TableNames) -> String {
    format!(
        r"
        DELETE FROM {images}
        WHERE id IN (SELECT id FROM {users} WHERE id = $1)
           OR id IN (SELECT id FROM {servers} WHERE owner_id = $1)
           OR id IN (SELECT id FROM {messages} WHERE user_id = $1)
           OR id IN (
                SELECT m.id
                FROM {messages} m
                JOIN {channels} c ON c.id = m.channel_id
                JOIN {servers} s ON s.id = c.server_id
                WHERE s.owner_id = $1
           )
        ",
        images = t.images,
        users = t.users,
        servers = t.servers,
        messages = t.messages,
        channels = t.channels,
    )
}

/// Images owned by a server: its own row and every message in its channels
pub(crate) fn server_images_sql(t: &TableNames) -> String {
    format!(
        r"
        DELETE FROM {images}
        WHERE id IN (SELECT id FROM {servers} WHERE id = $1)
           OR id IN (
                SELECT m.id
                FROM {messages} m
                JOIN {channels} c ON c.id = m.channel_id
                WHERE c.server_id = $1
           )
        ",
        images = t.images,
        servers = t.servers,
        messages = t.messages,
        channels = t.channels,
    )
}

/// Images of the messages posted in a channel
pub(crate) fn channel_images_sql(t: &TableNames) -> String {
    format!(
        "DELETE FROM {} WHERE id IN (SELECT id FROM {} WHERE channel_id = $1)",
        t.images, t.messages
    )
}

pub(crate) fn message_images_sql(t: &TableNames) -> String {
    format!(
        "DELETE FROM {} WHERE id IN (SELECT id FROM {} WHERE id = $1)",
        t.images, t.messages
    )
}

async fn execute(conn: &mut PgConnection, sql: &str, id: Id) -> RepoResult<u64> {
    let result = sqlx::query(sql)
        .bind(id.into_inner())
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(result.rows_affected())
}

pub(crate) async fn delete_user(conn: &mut PgConnection, tables: &TableNames, id: Id) -> RepoResult<u64> {
    execute(conn, &user_images_sql(tables), id).await
}

pub(crate) async fn delete_server(conn: &mut PgConnection, tables: &TableNames, id: Id) -> RepoResult<u64> {
    execute(conn, &server_images_sql(tables), id).await
}

pub(crate) async fn delete_message(conn: &mut PgConnection, tables: &TableNames, id: Id) -> RepoResult<u64> {
    execute(conn, &message_images_sql(tables), id).await
}

/// A single image row, with nothing reached through subtype tables
pub(crate) async fn delete_image(conn: &mut PgConnection, tables: &TableNames, id: Id) -> RepoResult<u64> {
    let sql = format!("DELETE FROM {} WHERE id = $1", tables.images);
    execute(conn, &sql, id).await
}

/// Channels are not images; their messages' image rows go first
pub(crate) async fn delete_channel(conn: &mut PgConnection, tables: &TableNames, id: Id) -> RepoResult<u64> {
    execute(conn, &channel_images_sql(tables), id).await?;

    let sql = format!("DELETE FROM {} WHERE id = $1", tables.channels);
    execute(conn, &sql, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qualified() -> TableNames {
        TableNames::qualified("chat_production").unwrap()
    }

    #[test]
    fn test_user_cascade_reaches_servers_and_messages() {
        let sql = user_images_sql(&qualified());
        assert!(sql.starts_with("\n        DELETE FROM chat_production.images"));
        assert!(sql.contains("SELECT id FROM chat_production.servers WHERE owner_id = $1"));
        assert!(sql.contains("SELECT id FROM chat_production.messages WHERE user_id = $1"));
        assert!(sql.contains("JOIN chat_production.servers s ON s.id = c.server_id"));
    }

    #[test]
    fn test_server_cascade_reaches_channel_messages() {
        let sql = server_images_sql(&TableNames::bare());
        assert!(sql.contains("DELETE FROM images"));
        assert!(sql.contains("WHERE c.server_id = $1"));
        assert!(!sql.contains("owner_id"));
    }

    #[test]
    fn test_leaf_cascades_only_touch_messages() {
        let tables = TableNames::bare();
        assert_eq!(
            channel_images_sql(&tables),
            "DELETE FROM images WHERE id IN (SELECT id FROM messages WHERE channel_id = $1)"
        );
        assert_eq!(
            message_images_sql(&tables),
            "DELETE FROM images WHERE id IN (SELECT id FROM messages WHERE id = $1)"
        );
    }
}
