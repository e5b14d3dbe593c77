//! Media file model for uploaded property assets.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::media_files;
use crate::types::MediaKind;

/// An uploaded media file attached to a property listing.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = media_files)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MediaFile {
    /// Unique media file identifier.
    pub id: Uuid,
    /// Listing this file belongs to.
    pub property_id: Uuid,
    /// Server-generated file name on disk (uuid + original extension).
    pub file_name: String,
    /// Public URL path for serving the file.
    pub file_url: String,
    /// Content category derived from the file extension.
    pub kind: MediaKind,
    /// File size in bytes.
    pub file_size: i64,
    /// Whether the file is visible in listings.
    pub is_active: bool,
    /// Timestamp when the file was uploaded.
    pub created_at: Timestamp,
    /// Timestamp when the record was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the record was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for recording a newly uploaded media file.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = media_files)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewMediaFile {
    /// Listing this file belongs to.
    pub property_id: Uuid,
    /// Server-generated file name on disk.
    pub file_name: String,
    /// Public URL path for serving the file.
    pub file_url: String,
    /// Content category derived from the file extension.
    pub kind: Option<MediaKind>,
    /// File size in bytes.
    pub file_size: i64,
}

impl MediaFile {
    /// Returns whether the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether the file should be shown with the listing.
    pub fn is_visible(&self) -> bool {
        self.is_active && !self.is_deleted()
    }
}
