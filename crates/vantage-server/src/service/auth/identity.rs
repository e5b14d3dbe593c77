//! Per-request identity context produced by successful authentication.

use uuid::Uuid;
use vantage_postgres::model::Account;
use vantage_postgres::types::AccountRole;

use crate::extract::AuthClaims;
use crate::service::auth::AuthError;

/// The verified identity attached to a request after authentication.
///
/// Holds only what downstream operations need for ownership checks: the
/// account id and the recorded role. It lives for the duration of one
/// request and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct IdentityContext {
    /// Identifier of the authenticated account.
    pub account_id: Uuid,
    /// Role recorded on the account.
    pub role: AccountRole,
}

impl IdentityContext {
    /// Creates a new identity context.
    #[inline]
    pub const fn new(account_id: Uuid, role: AccountRole) -> Self {
        Self { account_id, role }
    }

    /// Checks that this identity owns the targeted resource.
    ///
    /// Self-ownership is the only authorization rule in the system: roles
    /// are recorded but grant no elevated privilege here.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] when the owner differs.
    pub fn authorize_owner(&self, owner_id: Uuid) -> Result<(), AuthError> {
        if self.account_id == owner_id {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

impl From<&Account> for IdentityContext {
    fn from(account: &Account) -> Self {
        Self::new(account.id, account.role)
    }
}

impl From<&AuthClaims> for IdentityContext {
    fn from(claims: &AuthClaims) -> Self {
        Self::new(claims.account_id, claims.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_authorized() {
        let account_id = Uuid::new_v4();
        let identity = IdentityContext::new(account_id, AccountRole::Agent);
        assert!(identity.authorize_owner(account_id).is_ok());
    }

    #[test]
    fn non_owner_is_rejected_regardless_of_role() {
        // Even the admin role has no override; ownership is the only rule.
        let identity = IdentityContext::new(Uuid::new_v4(), AccountRole::Admin);
        let result = identity.authorize_owner(Uuid::new_v4());
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }
}
