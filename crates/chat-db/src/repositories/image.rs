//! PostgreSQL implementation of ImageRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument, warn};

use chat_core::entities::{Image, ImageKind, ImageRecord, NewImage};
use chat_core::traits::{ImageRepository, RepoResult};
use chat_core::value_objects::Id;

use crate::models::ImageModel;
use crate::schema::TableNames;

use super::cascade;
use super::error::{broken_subtype, image_not_found, map_db_error};
use super::sql::{insert_subtype_image, select_images};
use super::{message, server, user};

/// Insert the base row of a user, server or message
pub(crate) async fn insert_base_row(
    conn: &mut PgConnection,
    tables: &TableNames,
    kind: ImageKind,
    img_url: &str,
) -> RepoResult<Id> {
    let id = sqlx::query_scalar::<_, i64>(&insert_subtype_image(tables))
        .bind(kind.as_str())
        .bind(img_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(Id::new(id))
}

/// Set the url on the base row of any image
pub(crate) async fn set_img_url(
    conn: &mut PgConnection,
    tables: &TableNames,
    id: Id,
    img_url: &str,
) -> RepoResult<u64> {
    let sql = format!("UPDATE {} SET img_url = $2 WHERE id = $1", tables.images);
    let result = sqlx::query(&sql)
        .bind(id.into_inner())
        .bind(img_url)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(result.rows_affected())
}

/// PostgreSQL implementation of ImageRepository
#[derive(Clone)]
pub struct PgImageRepository {
    pool: PgPool,
    tables: TableNames,
}

impl PgImageRepository {
    /// Create a new PgImageRepository
    pub fn new(pool: PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ImageRecord>> {
        let sql = format!("{} WHERE i.id = $1", select_images(&self.tables));
        let model = sqlx::query_as::<_, ImageModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };
        let image = Image::try_from(model)?;

        let record = match image.kind {
            ImageKind::Image => ImageRecord::Image(image),
            ImageKind::User => user::fetch_user(&self.pool, &self.tables, id)
                .await?
                .map(ImageRecord::User)
                .ok_or_else(|| broken_subtype(id, ImageKind::User.as_str()))?,
            ImageKind::Server => server::fetch_server(&self.pool, &self.tables, id)
                .await?
                .map(ImageRecord::Server)
                .ok_or_else(|| broken_subtype(id, ImageKind::Server.as_str()))?,
            ImageKind::Message => message::fetch_message(&self.pool, &self.tables, id)
                .await?
                .map(ImageRecord::Message)
                .ok_or_else(|| broken_subtype(id, ImageKind::Message.as_str()))?,
        };

        Ok(Some(record))
    }

    #[instrument(skip(self))]
    async fn create(&self, image: &NewImage) -> RepoResult<Image> {
        let sql = format!(
            "INSERT INTO {} (type, type_id, img_url) VALUES ($1, $2, $3) \
             RETURNING id, type, type_id, img_url",
            self.tables.images
        );
        let model = sqlx::query_as::<_, ImageModel>(&sql)
            .bind(ImageKind::Image.as_str())
            .bind(image.type_id)
            .bind(&image.img_url)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Image::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_img_url(&self, id: Id, img_url: &str) -> RepoResult<()> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;

        if set_img_url(&mut conn, &self.tables, id, img_url).await? == 0 {
            return Err(image_not_found(id));
        }

        Ok(())
    }

    /// Deleting the base row of a subtype deletes the whole subtype entity
    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let sql = format!("SELECT type FROM {} WHERE id = $1 FOR UPDATE", self.tables.images);
        let kind: ImageKind = sqlx::query_scalar::<_, String>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| image_not_found(id))?
            .parse()?;

        debug!(%id, %kind, "Deleting image");

        let removed = match kind {
            ImageKind::User => cascade::delete_user(&mut tx, &self.tables, id).await?,
            ImageKind::Server => cascade::delete_server(&mut tx, &self.tables, id).await?,
            ImageKind::Message => cascade::delete_message(&mut tx, &self.tables, id).await?,
            ImageKind::Image => 0,
        };

        // A subtype cascade matches through the subtype table and misses a
        // base row whose subtype row is gone.
        if removed == 0 {
            if kind.is_subtype() {
                warn!(%id, %kind, "Image row has no matching subtype row, deleting it alone");
            }
            cascade::delete_image(&mut tx, &self.tables, id).await?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
