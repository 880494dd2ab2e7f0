//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::dict::MessageTree;
use chat_core::entities::{ImageKind, Message, NewMessage};
use chat_core::traits::{MessageRepository, RepoResult};
use chat_core::value_objects::Id;

use crate::models::MessageModel;
use crate::schema::TableNames;

use super::cascade;
use super::error::{map_db_error, message_not_found};
use super::graph::{begin_snapshot, message_trees};
use super::image::{insert_base_row, set_img_url};
use super::sql::select_messages;

pub(crate) async fn fetch_message<'e, E>(executor: E, tables: &TableNames, id: Id) -> RepoResult<Option<Message>>
where
    E: PgExecutor<'e>,
{
    let sql = format!("{} WHERE m.id = $1", select_messages(tables));
    let result = sqlx::query_as::<_, MessageModel>(&sql)
        .bind(id.into_inner())
        .fetch_optional(executor)
        .await
        .map_err(map_db_error)?;

    Ok(result.map(Message::from))
}

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
    tables: TableNames,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }

    async fn find_where(&self, column: &str, value: Id) -> RepoResult<Vec<Message>> {
        let sql = format!("{} WHERE m.{column} = $1 ORDER BY m.id", select_messages(&self.tables));
        let results = sqlx::query_as::<_, MessageModel>(&sql)
            .bind(value.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Message>> {
        fetch_message(&self.pool, &self.tables, id).await
    }

    #[instrument(skip(self))]
    async fn find_by_channel(&self, channel_id: Id) -> RepoResult<Vec<Message>> {
        self.find_where("channel_id", channel_id).await
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, user_id: Id) -> RepoResult<Vec<Message>> {
        self.find_where("user_id", user_id).await
    }

    #[instrument(skip(self, message), fields(channel_id = %message.channel_id, user_id = %message.user_id))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = insert_base_row(&mut tx, &self.tables, ImageKind::Message, &message.img_url).await?;

        let sql = format!(
            "INSERT INTO {} (id, channel_id, user_id, text) VALUES ($1, $2, $3, $4)",
            self.tables.messages
        );
        sqlx::query(&sql)
            .bind(id.into_inner())
            .bind(message.channel_id.into_inner())
            .bind(message.user_id.into_inner())
            .bind(&message.text)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Message::new(
            id,
            message.channel_id,
            message.user_id,
            message.text.clone(),
            message.img_url.clone(),
        ))
    }

    #[instrument(skip(self, message), fields(message_id = %message.id()))]
    async fn update(&self, message: &Message) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let sql = format!("UPDATE {} SET text = $2 WHERE id = $1", self.tables.messages);
        let result = sqlx::query(&sql)
            .bind(message.id().into_inner())
            .bind(&message.text)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(message.id()));
        }

        set_img_url(&mut tx, &self.tables, message.id(), &message.image.img_url).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if cascade::delete_message(&mut tx, &self.tables, id).await? == 0 {
            return Err(message_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn load_tree(&self, id: Id) -> RepoResult<Option<MessageTree>> {
        let mut tx = begin_snapshot(&self.pool).await?;
        let mut trees = message_trees(&mut tx, &self.tables, "m.id = $1", id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(trees.pop())
    }
}
