//! Error taxonomy for the authentication core.

use vantage_postgres::PgError;

use crate::service::HashingError;
use crate::service::auth::MIN_SECRET_LENGTH;

/// Terminal outcomes of authentication operations.
///
/// None of these are retried by the core: every variant except
/// [`AuthError::Store`] (and a rare [`AuthError::HashingFailure`]) is
/// deterministic for the same input, so retrying without changing the input
/// would fail identically.
///
/// [`AuthError::InvalidCredentials`] deliberately carries no detail about
/// *which* check failed: an unknown email and a wrong password produce the
/// same value, so callers cannot probe which accounts exist.
#[derive(Debug, thiserror::Error)]
#[must_use = "authentication errors should be handled appropriately"]
pub enum AuthError {
    /// An account with this email address already exists.
    #[error("an account with this email address already exists")]
    DuplicateAccount,

    /// The supplied secret is below the minimum length.
    #[error("password must be at least {MIN_SECRET_LENGTH} characters long")]
    WeakSecret,

    /// The password hasher failed internally (never due to secret content).
    #[error("password processing failed")]
    HashingFailure(#[source] HashingError),

    /// The email/password combination was not accepted.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The password was correct, but the account is deactivated.
    #[error("account is deactivated")]
    AccountDeactivated,

    /// The bearer token failed signature, structure, or time-bound checks.
    #[error("invalid or expired session token")]
    InvalidToken,

    /// No account exists for the requested identifier.
    #[error("account not found")]
    NotFound,

    /// The authenticated identity does not own the targeted resource.
    #[error("operation not permitted for this account")]
    Unauthorized,

    /// Signing the session token failed.
    #[error("failed to issue session token")]
    TokenIssuance(#[source] jsonwebtoken::errors::Error),

    /// The credential store failed.
    #[error(transparent)]
    Store(#[from] PgError),
}

impl AuthError {
    /// Returns whether retrying the same call could plausibly succeed.
    ///
    /// Only store connectivity problems qualify; every other variant is
    /// deterministic for the same input.
    pub fn is_transient(&self) -> bool {
        match self {
            AuthError::Store(e) => e.is_transient(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_errors_are_indistinguishable() {
        // The unknown-email path and the wrong-password path construct the
        // same variant; their rendered messages must be identical too.
        let unknown_email = AuthError::InvalidCredentials;
        let wrong_password = AuthError::InvalidCredentials;
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    }

    #[test]
    fn weak_secret_names_the_minimum() {
        assert!(AuthError::WeakSecret.to_string().contains('8'));
    }

    #[test]
    fn only_store_errors_are_transient() {
        assert!(!AuthError::InvalidCredentials.is_transient());
        assert!(!AuthError::DuplicateAccount.is_transient());

        let transient = AuthError::Store(PgError::Connection(
            diesel::result::ConnectionError::BadConnection("connection reset".to_string()),
        ));
        assert!(transient.is_transient());
    }
}
