//! Media kind enumeration for uploaded property files.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the broad content category of an uploaded media file.
///
/// This enumeration corresponds to the `MEDIA_KIND` PostgreSQL enum. The kind
/// is derived from the file extension at upload time.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::MediaKind"]
pub enum MediaKind {
    /// Still image (photo, floor plan, render).
    #[db_rename = "image"]
    #[serde(rename = "image")]
    #[strum(serialize = "image")]
    Image,

    /// Video walkthrough or drone footage.
    #[db_rename = "video"]
    #[serde(rename = "video")]
    #[strum(serialize = "video")]
    Video,

    /// Anything else on the upload allowlist.
    #[db_rename = "other"]
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    #[default]
    Other,
}

impl MediaKind {
    /// File extensions classified as still images.
    const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
    /// File extensions classified as video.
    const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov"];

    /// Classifies a media kind from a lowercase file extension (without the dot).
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.to_ascii_lowercase();
        if Self::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Image
        } else if Self::VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_extension() {
        assert_eq!(MediaKind::from_extension("jpg"), MediaKind::Image);
        assert_eq!(MediaKind::from_extension("WEBP"), MediaKind::Image);
        assert_eq!(MediaKind::from_extension("mov"), MediaKind::Video);
        assert_eq!(MediaKind::from_extension("glb"), MediaKind::Other);
    }
}
