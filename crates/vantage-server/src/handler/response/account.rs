//! Account response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vantage_postgres::model;
use vantage_postgres::types::AccountRole;

/// Public view of an account.
///
/// The stored password digest is structurally absent from this type, so no
/// serialization path can ever leak it.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier of the account.
    pub account_id: Uuid,
    /// Email address used as the login key.
    pub email_address: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Platform role recorded at registration.
    pub role: AccountRole,
    /// Contact phone number (optional).
    pub phone_number: Option<String>,
    /// Avatar image URL (optional).
    pub avatar_url: Option<String>,
    /// Whether the account can log in.
    pub is_active: bool,

    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
}

impl Account {
    /// Creates the public view from the database model.
    pub fn from_model(account: model::Account) -> Self {
        Self {
            account_id: account.id,
            email_address: account.email_address,
            first_name: account.first_name,
            last_name: account.last_name,
            role: account.role,
            phone_number: account.phone_number,
            avatar_url: account.avatar_url,
            is_active: account.is_active,
            created_at: account.created_at.into(),
            updated_at: account.updated_at.into(),
        }
    }
}

impl From<model::Account> for Account {
    fn from(account: model::Account) -> Self {
        Self::from_model(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> model::Account {
        model::Account {
            id: Uuid::new_v4(),
            role: AccountRole::Buyer,
            is_active: true,
            first_name: "Iris".to_string(),
            last_name: "Vane".to_string(),
            email_address: "iris@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            phone_number: Some("+1-555-0100".to_string()),
            avatar_url: None,
            created_at: Timestamp::UNIX_EPOCH.into(),
            updated_at: Timestamp::UNIX_EPOCH.into(),
            deleted_at: None,
        }
    }

    #[test]
    fn view_never_contains_password_hash() -> anyhow::Result<()> {
        let view = Account::from_model(sample_model());
        let json = serde_json::to_string(&view)?;

        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("iris@example.com"));
        Ok(())
    }
}
