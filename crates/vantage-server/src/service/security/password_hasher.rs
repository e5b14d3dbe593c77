//! Secure password hashing and verification using Argon2id.
//!
//! This module provides password hashing using the Argon2id algorithm with
//! its recommended default parameters. The cost parameters and salt are
//! embedded in the produced PHC string, so raising the work factor later
//! does not invalidate digests already stored.

use argon2::password_hash::Error as ArgonError;
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier};

/// Target identifier for password hashing service logging.
const TRACING_TARGET: &str = "vantage_server::service::password_hasher";

/// Errors produced by password hashing and verification.
///
/// A password mismatch is NOT an error: [`PasswordHasher::verify_password`]
/// reports it as `Ok(false)` so callers cannot confuse "wrong password"
/// with "the hasher broke".
#[derive(Debug, thiserror::Error)]
pub enum HashingError {
    /// The stored digest is not a recognizable PHC-format string.
    #[error("stored password digest is not a recognizable PHC string")]
    MalformedDigest,

    /// The blocking hash task was cancelled before completing.
    #[error("password hashing task was cancelled before completing")]
    Cancelled,

    /// The underlying hash backend failed.
    #[error("password hash backend failed: {0}")]
    Backend(argon2::password_hash::Error),
}

/// Secure password hashing and verification service using Argon2id.
///
/// Hash and verify are CPU-bound on purpose; callers on an async runtime
/// run them through `spawn_blocking` (see the auth service) so request
/// workers are not starved.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Creates a new instance of the [`PasswordHasher`] service.
    pub fn new() -> Self {
        let argon2 = Argon2::default();
        Self { argon2 }
    }

    /// Hashes a password using Argon2id with a cryptographically secure random salt.
    ///
    /// The returned PHC string includes the algorithm, cost parameters, and
    /// the salt, and can be stored directly. Hashing the same password twice
    /// produces two different digests because each call draws a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns [`HashingError::Backend`] if salt generation or the hashing
    /// operation itself fails. Failures never depend on the password content.
    pub fn hash_password(&self, password: &str) -> Result<String, HashingError> {
        let password_hash = self
            .argon2
            .hash_password_with_rng(&mut rand::rng(), password.as_bytes())
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password hashing operation failed"
                );
                HashingError::Backend(e)
            })?;

        Ok(password_hash.to_string())
    }

    /// Verifies a password against a stored PHC digest.
    ///
    /// Returns `Ok(true)` when the password matches and `Ok(false)` on a
    /// well-formed mismatch. The comparison of the derived hash is
    /// constant-time (argon2's verifier).
    ///
    /// # Errors
    ///
    /// - [`HashingError::MalformedDigest`] if `stored_hash` cannot be parsed
    /// - [`HashingError::Backend`] for any other verifier failure
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, HashingError> {
        let parsed_hash = PasswordHash::new(stored_hash).map_err(|e| {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %e,
                "invalid password digest encountered during verification"
            );
            HashingError::MalformedDigest
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(ArgonError::PasswordInvalid) => Ok(false),
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password verification system error"
                );
                Err(HashingError::Backend(e))
            }
        }
    }

    /// Performs a dummy password verification to maintain consistent timing.
    ///
    /// Used when an account does not exist so that a login attempt against a
    /// missing email burns the same work as one against a real digest,
    /// preventing account enumeration via timing analysis. Always returns
    /// `false`.
    pub fn verify_dummy_password(&self, password: &str) -> bool {
        use rand::RngExt;

        // Random dummy password so the hashed input is never attacker-chosen
        let password_len = rand::random_range(16..32);
        let dummy_password: String = (0..password_len)
            .map(|_| rand::rng().sample(rand::distr::Alphanumeric) as char)
            .collect();

        if let Ok(dummy_hash) = self.hash_password(&dummy_password) {
            let _ = self.verify_password(password, &dummy_hash);
        }

        false
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let password = "correct horse battery staple";
        let hash = hasher.hash_password(password)?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password(password, &hash)?);
        assert!(!hasher.verify_password("wrong password", &hash)?);

        Ok(())
    }

    #[test]
    fn hash_produces_unique_salts() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let password = "same password twice";

        let hash1 = hasher.hash_password(password)?;
        let hash2 = hasher.hash_password(password)?;

        assert_ne!(hash1, hash2);
        assert!(hasher.verify_password(password, &hash1)?);
        assert!(hasher.verify_password(password, &hash2)?);

        Ok(())
    }

    #[test]
    fn mismatch_is_not_an_error() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("the real one")?;

        let result = hasher.verify_password("an impostor", &hash);
        assert!(matches!(result, Ok(false)));

        Ok(())
    }

    #[test]
    fn malformed_digest_is_rejected() {
        let hasher = PasswordHasher::new();

        let result = hasher.verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(HashingError::MalformedDigest)));
    }

    #[test]
    fn dummy_verification_always_fails() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify_dummy_password("any password at all"));
    }
}
