//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::dict::UserTree;
use chat_core::entities::{ImageKind, NewUser, User};
use chat_core::traits::{RepoResult, UserRepository};
use chat_core::value_objects::Id;

use crate::models::UserModel;
use crate::schema::TableNames;

use super::error::{map_db_error, user_not_found};
use super::graph::{begin_snapshot, message_trees, server_trees};
use super::image::{insert_base_row, set_img_url};
use super::cascade;
use super::sql::select_users;

pub(crate) async fn fetch_user<'e, E>(executor: E, tables: &TableNames, id: Id) -> RepoResult<Option<User>>
where
    E: PgExecutor<'e>,
{
    let sql = format!("{} WHERE u.id = $1", select_users(tables));
    let result = sqlx::query_as::<_, UserModel>(&sql)
        .bind(id.into_inner())
        .fetch_optional(executor)
        .await
        .map_err(map_db_error)?;

    Ok(result.map(User::from))
}

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
    tables: TableNames,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }

    async fn find_by_column(&self, column: &str, value: &str) -> RepoResult<Option<User>> {
        let sql = format!("{} WHERE u.{column} = $1", select_users(&self.tables));
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        fetch_user(&self.pool, &self.tables, id).await
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        self.find_by_column("username", username).await
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.find_by_column("email", email).await
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = insert_base_row(&mut tx, &self.tables, ImageKind::User, &user.img_url).await?;

        let sql = format!(
            "INSERT INTO {} (id, username, email, hashed_password) VALUES ($1, $2, $3, $4)",
            self.tables.users
        );
        sqlx::query(&sql)
            .bind(id.into_inner())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.hashed_password)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(User::new(
            id,
            user.username.clone(),
            user.email.clone(),
            user.hashed_password.clone(),
            user.img_url.clone(),
        ))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let sql = format!(
            "UPDATE {} SET username = $2, email = $3 WHERE id = $1",
            self.tables.users
        );
        let result = sqlx::query(&sql)
            .bind(user.id().into_inner())
            .bind(&user.username)
            .bind(&user.email)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id()));
        }

        set_img_url(&mut tx, &self.tables, user.id(), &user.image.img_url).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, hashed_password))]
    async fn update_password(&self, id: Id, hashed_password: &str) -> RepoResult<()> {
        let sql = format!("UPDATE {} SET hashed_password = $2 WHERE id = $1", self.tables.users);
        let result = sqlx::query(&sql)
            .bind(id.into_inner())
            .bind(hashed_password)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if cascade::delete_user(&mut tx, &self.tables, id).await? == 0 {
            return Err(user_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn load_tree(&self, id: Id) -> RepoResult<Option<UserTree>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let Some(user) = fetch_user(&mut *tx, &self.tables, id).await? else {
            return Ok(None);
        };
        let servers = server_trees(&mut tx, &self.tables, "s.owner_id = $1", id).await?;
        let messages = message_trees(&mut tx, &self.tables, "m.user_id = $1", id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(UserTree {
            user,
            servers,
            messages,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_repository_is_send_sync() {
        _assert_send_sync::<PgUserRepository>();
    }
}
