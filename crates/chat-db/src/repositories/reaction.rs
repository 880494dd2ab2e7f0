//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::entities::{NewReaction, Reaction};
use chat_core::traits::{ReactionRepository, RepoResult};
use chat_core::value_objects::Id;

use crate::models::ReactionModel;
use crate::schema::TableNames;

use super::error::{map_db_error, reaction_not_found};
use super::sql::select_reactions;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
    tables: TableNames,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }

    async fn find_where(&self, column: &str, value: Id) -> RepoResult<Vec<Reaction>> {
        let sql = format!("{} WHERE r.{column} = $1 ORDER BY r.id", select_reactions(&self.tables));
        let results = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(value.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Reaction>> {
        let sql = format!("{} WHERE r.id = $1", select_reactions(&self.tables));
        let result = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_message(&self, message_id: Id) -> RepoResult<Vec<Reaction>> {
        self.find_where("message_id", message_id).await
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Id) -> RepoResult<Vec<Reaction>> {
        self.find_where("user_id", user_id).await
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &NewReaction) -> RepoResult<Reaction> {
        let sql = format!(
            "INSERT INTO {} (message_id, user_id, type) VALUES ($1, $2, $3) \
             RETURNING id, message_id, user_id, type",
            self.tables.reactions
        );
        let model = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(reaction.message_id.into_inner())
            .bind(reaction.user_id.into_inner())
            .bind(&reaction.reaction_type)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Reaction::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.tables.reactions);
        let result = sqlx::query(&sql)
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reaction_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_repository_is_send_sync() {
        _assert_send_sync::<PgReactionRepository>();
    }
}
