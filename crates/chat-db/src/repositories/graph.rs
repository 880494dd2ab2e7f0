//! Loading fully expanded entity graphs
//!
//! A graph is read level by level: one query per table, each narrowed with a
//! predicate built from the level above (`m.channel_id IN (SELECT c.id ...)`),
//! then stitched together in memory. Every level binds the same `$1`.
//! Callers run the loaders on a repeatable-read transaction so all levels see
//! one snapshot.

use sqlx::{PgConnection, Postgres, Transaction};

use chat_core::dict::{ChannelTree, MessageTree, ServerTree};
use chat_core::entities::{Channel, Message, Reaction, Server};
use chat_core::traits::RepoResult;
use chat_core::value_objects::Id;

use crate::models::{ChannelModel, MessageModel, ReactionModel, ServerModel};
use crate::schema::TableNames;

use super::error::map_db_error;
use super::sql::{select_channels, select_messages, select_reactions, select_servers};

/// Begin a transaction with a single snapshot for every statement
pub(crate) async fn begin_snapshot(pool: &sqlx::PgPool) -> RepoResult<Transaction<'static, Postgres>> {
    let mut tx = pool.begin().await.map_err(map_db_error)?;

    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

    Ok(tx)
}

/// Messages matching `scope` (written against alias `m`) with their reactions
pub(crate) async fn message_trees(
    conn: &mut PgConnection,
    tables: &TableNames,
    scope: &str,
    id: Id,
) -> RepoResult<Vec<MessageTree>> {
    let messages_sql = format!("{} WHERE {scope} ORDER BY m.id", select_messages(tables));
    let messages = sqlx::query_as::<_, MessageModel>(&messages_sql)
        .bind(id.into_inner())
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

    let reactions_sql = format!(
        "{} JOIN {} m ON m.id = r.message_id WHERE {scope} ORDER BY r.id",
        select_reactions(tables),
        tables.messages
    );
    let reactions = sqlx::query_as::<_, ReactionModel>(&reactions_sql)
        .bind(id.into_inner())
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(MessageTree::assemble(
        messages.into_iter().map(Message::from).collect(),
        reactions.into_iter().map(Reaction::from).collect(),
    ))
}

/// Channels matching `scope` (alias `c`) with everything posted in them
pub(crate) async fn channel_trees(
    conn: &mut PgConnection,
    tables: &TableNames,
    scope: &str,
    id: Id,
) -> RepoResult<Vec<ChannelTree>> {
    let channels_sql = format!("{} WHERE {scope} ORDER BY c.id", select_channels(tables));
    let channels = sqlx::query_as::<_, ChannelModel>(&channels_sql)
        .bind(id.into_inner())
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

    let message_scope = format!(
        "m.channel_id IN (SELECT c.id FROM {} c WHERE {scope})",
        tables.channels
    );
    let messages = message_trees(conn, tables, &message_scope, id).await?;

    Ok(ChannelTree::assemble(
        channels.into_iter().map(Channel::from).collect(),
        messages,
    ))
}

/// Servers matching `scope` (alias `s`) with their channels expanded
pub(crate) async fn server_trees(
    conn: &mut PgConnection,
    tables: &TableNames,
    scope: &str,
    id: Id,
) -> RepoResult<Vec<ServerTree>> {
    let servers_sql = format!("{} WHERE {scope} ORDER BY s.id", select_servers(tables));
    let servers = sqlx::query_as::<_, ServerModel>(&servers_sql)
        .bind(id.into_inner())
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

    let channel_scope = format!(
        "c.server_id IN (SELECT s.id FROM {} s WHERE {scope})",
        tables.servers
    );
    let channels = channel_trees(conn, tables, &channel_scope, id).await?;

    Ok(ServerTree::assemble(
        servers.into_iter().map(Server::from).collect(),
        channels,
    ))
}
