//! Account role enumeration for the fixed set of platform roles.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the role an account holds on the platform.
///
/// This enumeration corresponds to the `ACCOUNT_ROLE` PostgreSQL enum. Roles
/// are recorded on the account and carried in session claims; resource
/// mutations are authorized by ownership, not by role.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::AccountRole"]
pub enum AccountRole {
    /// Browses and inquires about listings.
    #[db_rename = "buyer"]
    #[serde(rename = "buyer")]
    #[strum(serialize = "buyer")]
    #[default]
    Buyer,

    /// Lists their own property for sale.
    #[db_rename = "seller"]
    #[serde(rename = "seller")]
    #[strum(serialize = "seller")]
    Seller,

    /// Licensed agent managing listings on behalf of clients.
    #[db_rename = "agent"]
    #[serde(rename = "agent")]
    #[strum(serialize = "agent")]
    Agent,

    /// Platform administrator.
    #[db_rename = "admin"]
    #[serde(rename = "admin")]
    #[strum(serialize = "admin")]
    Admin,
}

impl AccountRole {
    /// Returns whether this role is the administrator role.
    ///
    /// Recorded for audit purposes only; no code path grants elevated
    /// privileges based on it.
    #[inline]
    pub fn is_administrator(self) -> bool {
        matches!(self, AccountRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() -> anyhow::Result<()> {
        let json = serde_json::to_string(&AccountRole::Agent)?;
        assert_eq!(json, "\"agent\"");

        let role: AccountRole = serde_json::from_str("\"buyer\"")?;
        assert_eq!(role, AccountRole::Buyer);
        Ok(())
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("seller".parse(), Ok(AccountRole::Seller));
        assert_eq!(AccountRole::Admin.to_string(), "admin");
        assert!("landlord".parse::<AccountRole>().is_err());
    }

    #[test]
    fn default_role_is_buyer() {
        assert_eq!(AccountRole::default(), AccountRole::Buyer);
        assert!(!AccountRole::default().is_administrator());
    }
}
