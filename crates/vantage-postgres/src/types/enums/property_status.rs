//! Property status enumeration for listing lifecycle tracking.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines where a listing is in its sales lifecycle.
///
/// This enumeration corresponds to the `PROPERTY_STATUS` PostgreSQL enum.
/// New listings start as [`PropertyStatus::Available`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::PropertyStatus"]
pub enum PropertyStatus {
    /// Listed and open to offers.
    #[db_rename = "available"]
    #[serde(rename = "available")]
    #[strum(serialize = "available")]
    #[default]
    Available,

    /// An offer has been accepted but not closed.
    #[db_rename = "pending"]
    #[serde(rename = "pending")]
    #[strum(serialize = "pending")]
    Pending,

    /// Sale closed.
    #[db_rename = "sold"]
    #[serde(rename = "sold")]
    #[strum(serialize = "sold")]
    Sold,

    /// Leased to a tenant.
    #[db_rename = "rented"]
    #[serde(rename = "rented")]
    #[strum(serialize = "rented")]
    Rented,
}

impl PropertyStatus {
    /// Returns whether the listing can still be shown to prospective buyers.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, PropertyStatus::Available | PropertyStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_listings_are_available() {
        assert_eq!(PropertyStatus::default(), PropertyStatus::Available);
        assert!(PropertyStatus::default().is_open());
        assert!(!PropertyStatus::Sold.is_open());
    }
}
