//! PostgreSQL implementation of ServerRepository

use async_trait::async_trait;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::dict::ServerTree;
use chat_core::entities::{ImageKind, NewServer, Server};
use chat_core::traits::{RepoResult, ServerRepository};
use chat_core::value_objects::Id;

use crate::models::ServerModel;
use crate::schema::TableNames;

use super::cascade;
use super::error::{map_db_error, server_not_found};
use super::graph::{begin_snapshot, server_trees};
use super::image::{insert_base_row, set_img_url};
use super::sql::select_servers;

pub(crate) async fn fetch_server<'e, E>(executor: E, tables: &TableNames, id: Id) -> RepoResult<Option<Server>>
where
    E: PgExecutor<'e>,
{
    let sql = format!("{} WHERE s.id = $1", select_servers(tables));
    let result = sqlx::query_as::<_, ServerModel>(&sql)
        .bind(id.into_inner())
        .fetch_optional(executor)
        .await
        .map_err(map_db_error)?;

    Ok(result.map(Server::from))
}

/// PostgreSQL implementation of ServerRepository
#[derive(Clone)]
pub struct PgServerRepository {
    pool: PgPool,
    tables: TableNames,
}

impl PgServerRepository {
    /// Create a new PgServerRepository
    pub fn new(pool: PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

#[async_trait]
impl ServerRepository for PgServerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Server>> {
        fetch_server(&self.pool, &self.tables, id).await
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: Id) -> RepoResult<Vec<Server>> {
        let sql = format!("{} WHERE s.owner_id = $1 ORDER BY s.id", select_servers(&self.tables));
        let results = sqlx::query_as::<_, ServerModel>(&sql)
            .bind(owner_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Server::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, server: &NewServer) -> RepoResult<Server> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = insert_base_row(&mut tx, &self.tables, ImageKind::Server, &server.img_url).await?;

        let sql = format!(
            r#"INSERT INTO {} (id, name, "DM", owner_id) VALUES ($1, $2, $3, $4)"#,
            self.tables.servers
        );
        sqlx::query(&sql)
            .bind(id.into_inner())
            .bind(&server.name)
            .bind(server.dm)
            .bind(server.owner_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Server::new(
            id,
            server.name.clone(),
            server.dm,
            server.owner_id,
            server.img_url.clone(),
        ))
    }

    #[instrument(skip(self, server), fields(server_id = %server.id()))]
    async fn update(&self, server: &Server) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let sql = format!(
            r#"UPDATE {} SET name = $2, "DM" = $3, owner_id = $4 WHERE id = $1"#,
            self.tables.servers
        );
        let result = sqlx::query(&sql)
            .bind(server.id().into_inner())
            .bind(&server.name)
            .bind(server.dm)
            .bind(server.owner_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(server_not_found(server.id()));
        }

        set_img_url(&mut tx, &self.tables, server.id(), &server.image.img_url).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if cascade::delete_server(&mut tx, &self.tables, id).await? == 0 {
            return Err(server_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn load_tree(&self, id: Id) -> RepoResult<Option<ServerTree>> {
        let mut tx = begin_snapshot(&self.pool).await?;
        let mut trees = server_trees(&mut tx, &self.tables, "s.id = $1", id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(trees.pop())
    }
}
