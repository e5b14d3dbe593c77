//! Session response returned by login.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Account;
use crate::extract::AuthClaims;

/// Response returned after a successful login.
///
/// Carries the bearer token itself plus the account view; the stored
/// password digest appears in neither.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The signed bearer token to present on subsequent requests.
    pub token: String,
    /// Public view of the authenticated account.
    pub account: Account,

    /// Timestamp when the token was issued.
    pub issued_at: Timestamp,
    /// Timestamp when the token expires.
    pub expires_at: Timestamp,
}

impl Session {
    /// Assembles the session payload from the issued token and its claims.
    pub fn new(token: String, claims: &AuthClaims, account: Account) -> Self {
        Self {
            token,
            account,
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
        }
    }
}
