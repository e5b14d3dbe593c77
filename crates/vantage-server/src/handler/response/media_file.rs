//! Media file response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vantage_postgres::model;
use vantage_postgres::types::MediaKind;

/// Public view of an uploaded media file.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    /// Unique identifier of the media file.
    pub media_file_id: Uuid,
    /// Listing this file belongs to.
    pub property_id: Uuid,
    /// Server-generated file name.
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
}

impl MediaFile {
    /// Creates the public view from the database model.
    pub fn from_model(media_file: model::MediaFile) -> Self {
        Self {
            media_file_id: media_file.id,
            property_id: media_file.property_id,
            file_name: media_file.file_name,
            file_url: media_file.file_url,
            kind: media_file.kind,
            file_size: media_file.file_size,
            is_active: media_file.is_active,
            created_at: media_file.created_at.into(),
            updated_at: media_file.updated_at.into(),
        }
    }
}

impl From<model::MediaFile> for MediaFile {
    fn from(media_file: model::MediaFile) -> Self {
        Self::from_model(media_file)
    }
}
