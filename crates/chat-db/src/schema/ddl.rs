//! DDL for the chat schema
//!
//! Users, servers and messages share their primary key with a row in
//! `images` (joined-table inheritance). Every foreign key cascades on delete.
//! Cascades only run from parent to child, so the repositories also delete
//! the image rows of any subtype row a cascade removes.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::repositories::map_db_error;
use crate::schema::TableNames;
use chat_core::traits::RepoResult;

/// Statements that create the schema, in execution order
pub fn create_statements(tables: &TableNames) -> Vec<String> {
    let TableNames {
        images,
        users,
        servers,
        channels,
        messages,
        reactions,
        ..
    } = tables;

    let mut statements = Vec::with_capacity(11);

    if let Some(namespace) = tables.namespace() {
        statements.push(format!("CREATE SCHEMA IF NOT EXISTS {namespace}"));
    }

    statements.push(format!(
        r"
        CREATE TABLE IF NOT EXISTS {images} (
            id       BIGSERIAL PRIMARY KEY,
            type     VARCHAR(50)  NOT NULL CHECK (type IN ('image', 'user', 'server', 'message')),
            type_id  BIGINT       NOT NULL,
            img_url  VARCHAR(250) NOT NULL DEFAULT ''
        )"
    ));

    statements.push(format!(
        r"
        CREATE TABLE IF NOT EXISTS {users} (
            id              BIGINT PRIMARY KEY REFERENCES {images}(id) ON DELETE CASCADE,
            username        VARCHAR(40)  NOT NULL UNIQUE,
            email           VARCHAR(255) NOT NULL UNIQUE,
            hashed_password VARCHAR(255) NOT NULL
        )"
    ));

    statements.push(format!(
        r#"
        CREATE TABLE IF NOT EXISTS {servers} (
            id        BIGINT PRIMARY KEY REFERENCES {images}(id) ON DELETE CASCADE,
            name      VARCHAR(50) NOT NULL UNIQUE,
            "DM"      BOOLEAN     NOT NULL DEFAULT FALSE,
            owner_id  BIGINT      NOT NULL REFERENCES {users}(id) ON DELETE CASCADE
        )"#
    ));

    // Channel names are unique across every server.
    statements.push(format!(
        r"
        CREATE TABLE IF NOT EXISTS {channels} (
            id         BIGSERIAL PRIMARY KEY,
            server_id  BIGINT      NOT NULL REFERENCES {servers}(id) ON DELETE CASCADE,
            name       VARCHAR(50) NOT NULL UNIQUE
        )"
    ));

    statements.push(format!(
        r"
        CREATE TABLE IF NOT EXISTS {messages} (
            id          BIGINT PRIMARY KEY REFERENCES {images}(id) ON DELETE CASCADE,
            channel_id  BIGINT       NOT NULL REFERENCES {channels}(id) ON DELETE CASCADE,
            user_id     BIGINT       NOT NULL REFERENCES {users}(id) ON DELETE CASCADE,
            text        VARCHAR(250) NOT NULL
        )"
    ));

    statements.push(format!(
        r"
        CREATE TABLE IF NOT EXISTS {reactions} (
            id          BIGSERIAL PRIMARY KEY,
            message_id  BIGINT      NOT NULL REFERENCES {messages}(id) ON DELETE CASCADE,
            user_id     BIGINT      NOT NULL REFERENCES {users}(id) ON DELETE CASCADE,
            type        VARCHAR(50) NOT NULL
        )"
    ));

    for (index, table, column) in [
        ("idx_servers_owner_id", servers, "owner_id"),
        ("idx_channels_server_id", channels, "server_id"),
        ("idx_messages_channel_id", messages, "channel_id"),
        ("idx_messages_user_id", messages, "user_id"),
        ("idx_reactions_message_id", reactions, "message_id"),
    ] {
        statements.push(format!(
            "CREATE INDEX IF NOT EXISTS {index} ON {table} ({column})"
        ));
    }

    statements
}

/// Statements that drop every table, children first
pub fn drop_statements(tables: &TableNames) -> Vec<String> {
    tables
        .in_dependency_order()
        .iter()
        .rev()
        .map(|table| format!("DROP TABLE IF EXISTS {table} CASCADE"))
        .collect()
}

/// Create any missing tables, in one transaction
#[instrument(skip(pool))]
pub async fn apply_schema(pool: &PgPool, tables: &TableNames) -> RepoResult<()> {
    run_all(pool, &create_statements(tables)).await?;
    info!(namespace = ?tables.namespace(), "Schema applied");
    Ok(())
}

/// Drop every table, in one transaction
#[instrument(skip(pool))]
pub async fn drop_schema(pool: &PgPool, tables: &TableNames) -> RepoResult<()> {
    run_all(pool, &drop_statements(tables)).await?;
    info!(namespace = ?tables.namespace(), "Schema dropped");
    Ok(())
}

async fn run_all(pool: &PgPool, statements: &[String]) -> RepoResult<()> {
    let mut tx = pool.begin().await.map_err(map_db_error)?;
    for statement in statements {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
    }
    tx.commit().await.map_err(map_db_error)
}
