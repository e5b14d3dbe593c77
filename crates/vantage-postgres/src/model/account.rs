//! Account model for PostgreSQL database operations.
//!
//! This module provides the core account model backing authentication and
//! profile lookups.
//!
//! ## Models
//!
//! - [`Account`] - Main account model including the stored password digest
//! - [`NewAccount`] - Data structure for creating new accounts
//! - [`UpdateAccount`] - Data structure for updating existing accounts

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::accounts;
use crate::types::AccountRole;

/// Main account model representing a registered user.
///
/// The `password_hash` field is a PHC-format digest and must never be
/// serialized outward; response types own that guarantee.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    /// Unique account identifier, assigned at creation.
    pub id: Uuid,
    /// Platform role recorded at registration.
    pub role: AccountRole,
    /// Gate on login; deactivated accounts cannot sign in.
    pub is_active: bool,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login key; unique, stored lowercase.
    pub email_address: String,
    /// Salted password digest in PHC string format. Never empty once set.
    pub password_hash: String,
    /// Optional contact phone number.
    pub phone_number: Option<String>,
    /// Optional URL to a profile avatar image.
    pub avatar_url: Option<String>,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the account was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for creating a new account.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAccount {
    /// Platform role for the new account.
    pub role: AccountRole,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login key; normalized to lowercase before insert.
    pub email_address: String,
    /// Salted password digest in PHC string format.
    pub password_hash: String,
    /// Optional contact phone number.
    pub phone_number: Option<String>,
}

/// Data for updating an account.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateAccount {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// URL to a profile avatar image.
    pub avatar_url: Option<String>,
    /// Login gate.
    pub is_active: Option<bool>,
}

impl Account {
    /// Returns whether the account has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether the account can log in.
    pub fn can_login(&self) -> bool {
        self.is_active && !self.is_deleted()
    }

    /// Returns the account holder's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns whether the account has a phone number set.
    pub fn has_phone_number(&self) -> bool {
        self.phone_number
            .as_deref()
            .is_some_and(|phone_number| !phone_number.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        Account {
            id: Uuid::new_v4(),
            role: AccountRole::Agent,
            is_active: true,
            first_name: "Ada".to_string(),
            last_name: "Mercer".to_string(),
            email_address: "ada@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            phone_number: None,
            avatar_url: None,
            created_at: jiff::Timestamp::UNIX_EPOCH.into(),
            updated_at: jiff::Timestamp::UNIX_EPOCH.into(),
            deleted_at: None,
        }
    }

    #[test]
    fn active_account_can_login() {
        let account = sample_account();
        assert!(account.can_login());
        assert_eq!(account.full_name(), "Ada Mercer");
    }

    #[test]
    fn deactivated_account_cannot_login() {
        let account = Account {
            is_active: false,
            ..sample_account()
        };
        assert!(!account.can_login());
    }

    #[test]
    fn deleted_account_cannot_login() {
        let account = Account {
            deleted_at: Some(jiff::Timestamp::UNIX_EPOCH.into()),
            ..sample_account()
        };
        assert!(account.is_deleted());
        assert!(!account.can_login());
    }
}
