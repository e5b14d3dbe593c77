//! Authentication error to HTTP error conversion.

use crate::handler::{Error, ErrorKind};
use crate::service::{AuthError, MIN_SECRET_LENGTH};

/// Tracing target for authentication error conversion.
const TRACING_TARGET: &str = "vantage_server::handler::auth_error";

impl From<AuthError> for Error<'static> {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::DuplicateAccount => ErrorKind::Conflict
                .with_message("An account with this email address already exists")
                .with_resource("account"),

            AuthError::WeakSecret => ErrorKind::BadRequest
                .with_message(format!(
                    "Password must be at least {} characters long",
                    MIN_SECRET_LENGTH
                ))
                .with_resource("account"),

            AuthError::HashingFailure(e) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password hashing failure"
                );
                ErrorKind::InternalServerError.into_error()
            }

            // One message for unknown email and wrong password; telling them
            // apart would let callers enumerate accounts
            AuthError::InvalidCredentials => ErrorKind::Unauthorized
                .with_message("Invalid email or password")
                .with_resource("authentication"),

            AuthError::AccountDeactivated => ErrorKind::Forbidden
                .with_message("This account has been deactivated")
                .with_resource("account"),

            AuthError::InvalidToken => ErrorKind::Unauthorized
                .with_message("Invalid or expired session token")
                .with_resource("authentication"),

            AuthError::NotFound => ErrorKind::NotFound
                .with_message("Account not found")
                .with_resource("account"),

            AuthError::Unauthorized => ErrorKind::Forbidden
                .with_message("You do not have permission to modify this resource"),

            AuthError::TokenIssuance(e) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "session token issuance failed"
                );
                ErrorKind::InternalServerError.into_error()
            }

            AuthError::Store(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_share_one_shape() {
        let error: Error<'static> = AuthError::InvalidCredentials.into();
        assert_eq!(error.kind(), ErrorKind::Unauthorized);
        assert_eq!(error.message(), Some("Invalid email or password"));
    }

    #[test]
    fn duplicate_account_conflicts() {
        let error: Error<'static> = AuthError::DuplicateAccount.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn ownership_failure_is_forbidden() {
        let error: Error<'static> = AuthError::Unauthorized.into();
        assert_eq!(error.kind(), ErrorKind::Forbidden);
    }
}
