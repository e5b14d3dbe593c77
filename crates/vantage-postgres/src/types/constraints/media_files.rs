//! Media files table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Media file table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum MediaFileConstraints {
    // Media file validation constraints
    #[strum(serialize = "media_files_file_name_not_empty")]
    FileNameNotEmpty,
    #[strum(serialize = "media_files_file_size_non_negative")]
    FileSizeNonNegative,

    // Media file reference constraints
    #[strum(serialize = "media_files_property_id_fkey")]
    PropertyReference,
}

impl MediaFileConstraints {
    /// Creates a new [`MediaFileConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            MediaFileConstraints::FileNameNotEmpty
            | MediaFileConstraints::FileSizeNonNegative => ConstraintCategory::Validation,

            MediaFileConstraints::PropertyReference => ConstraintCategory::Reference,
        }
    }
}

impl From<MediaFileConstraints> for String {
    #[inline]
    fn from(val: MediaFileConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for MediaFileConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
