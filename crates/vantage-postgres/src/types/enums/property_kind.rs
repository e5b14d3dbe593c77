//! Property kind enumeration for listing categorization.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the physical category of a listed property.
///
/// This enumeration corresponds to the `PROPERTY_KIND` PostgreSQL enum.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::PropertyKind"]
pub enum PropertyKind {
    /// Detached single-family house.
    #[db_rename = "house"]
    #[serde(rename = "house")]
    #[strum(serialize = "house")]
    House,

    /// Unit in a condominium building.
    #[db_rename = "condo"]
    #[serde(rename = "condo")]
    #[strum(serialize = "condo")]
    Condo,

    /// Multi-floor attached home.
    #[db_rename = "townhouse"]
    #[serde(rename = "townhouse")]
    #[strum(serialize = "townhouse")]
    Townhouse,

    /// Rental-style unit in a multi-unit building.
    #[db_rename = "apartment"]
    #[serde(rename = "apartment")]
    #[strum(serialize = "apartment")]
    Apartment,

    /// Undeveloped land.
    #[db_rename = "land"]
    #[serde(rename = "land")]
    #[strum(serialize = "land")]
    Land,

    /// Commercial real estate.
    #[db_rename = "commercial"]
    #[serde(rename = "commercial")]
    #[strum(serialize = "commercial")]
    Commercial,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() -> anyhow::Result<()> {
        let json = serde_json::to_string(&PropertyKind::Townhouse)?;
        assert_eq!(json, "\"townhouse\"");

        let kind: PropertyKind = serde_json::from_str("\"land\"")?;
        assert_eq!(kind, PropertyKind::Land);
        Ok(())
    }
}
