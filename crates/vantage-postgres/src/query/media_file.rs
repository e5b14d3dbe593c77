//! Media file repository for uploaded property assets.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use crate::model::{MediaFile, NewMediaFile};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for media file database operations.
pub trait MediaFileRepository {
    /// Records a newly uploaded media file.
    fn create_media_file(
        &mut self,
        new_media_file: NewMediaFile,
    ) -> impl Future<Output = PgResult<MediaFile>> + Send;

    /// Finds a media file by its unique identifier.
    ///
    /// Soft-deleted records are excluded.
    fn find_media_file_by_id(
        &mut self,
        media_file_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<MediaFile>>> + Send;

    /// Lists the active media files attached to a listing, oldest first.
    fn list_media_files_by_property(
        &mut self,
        property_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<MediaFile>>> + Send;

    /// Soft deletes a media file record.
    ///
    /// Returns `None` if the record was not found. Removing the bytes from
    /// disk is the caller's responsibility.
    fn delete_media_file(
        &mut self,
        media_file_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<MediaFile>>> + Send;
}

impl MediaFileRepository for PgConnection {
    async fn create_media_file(&mut self, new_media_file: NewMediaFile) -> PgResult<MediaFile> {
        use schema::media_files;

        diesel::insert_into(media_files::table)
            .values(&new_media_file)
            .returning(MediaFile::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_media_file_by_id(&mut self, media_file_id: Uuid) -> PgResult<Option<MediaFile>> {
        use schema::media_files::{self, dsl};

        media_files::table
            .filter(dsl::id.eq(media_file_id))
            .filter(dsl::deleted_at.is_null())
            .select(MediaFile::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_media_files_by_property(
        &mut self,
        property_id: Uuid,
    ) -> PgResult<Vec<MediaFile>> {
        use schema::media_files::{self, dsl};

        media_files::table
            .filter(dsl::property_id.eq(property_id))
            .filter(dsl::is_active.eq(true))
            .filter(dsl::deleted_at.is_null())
            .order(dsl::created_at.asc())
            .select(MediaFile::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_media_file(&mut self, media_file_id: Uuid) -> PgResult<Option<MediaFile>> {
        use schema::media_files::{self, dsl};

        diesel::update(media_files::table.filter(dsl::id.eq(media_file_id)))
            .set(dsl::deleted_at.eq(Some(jiff_diesel::Timestamp::from(Timestamp::now()))))
            .returning(MediaFile::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
