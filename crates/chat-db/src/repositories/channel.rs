//! PostgreSQL implementation of ChannelRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::dict::ChannelTree;
use chat_core::entities::{Channel, NewChannel};
use chat_core::traits::{ChannelRepository, RepoResult};
use chat_core::value_objects::Id;

use crate::models::ChannelModel;
use crate::schema::TableNames;

use super::cascade;
use super::error::{channel_not_found, map_db_error};
use super::graph::{begin_snapshot, channel_trees};
use super::sql::select_channels;

/// PostgreSQL implementation of ChannelRepository
#[derive(Clone)]
pub struct PgChannelRepository {
    pool: PgPool,
    tables: TableNames,
}

impl PgChannelRepository {
    /// Create a new PgChannelRepository
    pub fn new(pool: PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

#[async_trait]
impl ChannelRepository for PgChannelRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Channel>> {
        let sql = format!("{} WHERE c.id = $1", select_channels(&self.tables));
        let result = sqlx::query_as::<_, ChannelModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Channel::from))
    }

    #[instrument(skip(self))]
    async fn find_by_server(&self, server_id: Id) -> RepoResult<Vec<Channel>> {
        let sql = format!("{} WHERE c.server_id = $1 ORDER BY c.id", select_channels(&self.tables));
        let results = sqlx::query_as::<_, ChannelModel>(&sql)
            .bind(server_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Channel::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, channel: &NewChannel) -> RepoResult<Channel> {
        let sql = format!(
            "INSERT INTO {} (server_id, name) VALUES ($1, $2) RETURNING id, server_id, name",
            self.tables.channels
        );
        let model = sqlx::query_as::<_, ChannelModel>(&sql)
            .bind(channel.server_id.into_inner())
            .bind(&channel.name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Channel::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, channel: &Channel) -> RepoResult<()> {
        let sql = format!(
            "UPDATE {} SET server_id = $2, name = $3 WHERE id = $1",
            self.tables.channels
        );
        let result = sqlx::query(&sql)
            .bind(channel.id.into_inner())
            .bind(channel.server_id.into_inner())
            .bind(&channel.name)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(channel_not_found(channel.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if cascade::delete_channel(&mut tx, &self.tables, id).await? == 0 {
            return Err(channel_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn load_tree(&self, id: Id) -> RepoResult<Option<ChannelTree>> {
        let mut tx = begin_snapshot(&self.pool).await?;
        let mut trees = channel_trees(&mut tx, &self.tables, "c.id = $1", id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(trees.pop())
    }
}
