//! Signing keys for bearer token issuance and validation.
//!
//! The platform signs session tokens with a single symmetric secret held as
//! process-wide configuration. The secret is injected once at startup and is
//! read-only afterwards; key rotation at runtime is out of scope.

use std::fmt;
use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};

/// Target identifier for key management logging.
const TRACING_TARGET: &str = "vantage_server::service::auth_keys";

/// Errors raised while constructing [`AuthKeys`].
#[derive(Debug, thiserror::Error)]
pub enum AuthKeysError {
    /// The configured signing secret is too short to be safe.
    #[error("signing secret must be at least {min} bytes, got {len}")]
    SecretTooShort {
        /// Required minimum length in bytes.
        min: usize,
        /// Actual length in bytes.
        len: usize,
    },
}

/// Symmetric keys used to sign and verify session tokens.
///
/// This struct provides thread-safe, read-only access to the HMAC keys
/// derived from the configured signing secret. Cloning is cheap.
#[derive(Clone)]
pub struct AuthKeys {
    inner: Arc<AuthKeysInner>,
}

/// Internal container for the actual key data.
struct AuthKeysInner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthKeys {
    /// Minimum accepted signing secret length in bytes.
    pub const MIN_SECRET_BYTES: usize = 32;

    /// Creates signing keys from the configured symmetric secret.
    ///
    /// # Errors
    ///
    /// Returns [`AuthKeysError::SecretTooShort`] if the secret is shorter
    /// than [`Self::MIN_SECRET_BYTES`].
    pub fn from_secret(secret: &[u8]) -> Result<Self, AuthKeysError> {
        if secret.len() < Self::MIN_SECRET_BYTES {
            return Err(AuthKeysError::SecretTooShort {
                min: Self::MIN_SECRET_BYTES,
                len: secret.len(),
            });
        }

        tracing::debug!(
            target: TRACING_TARGET,
            secret_bytes = secret.len(),
            "derived token signing keys from configured secret"
        );

        let inner = Arc::new(AuthKeysInner {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        });
        Ok(Self { inner })
    }

    /// Returns a reference to the encoding key.
    ///
    /// This key is used to sign session tokens.
    #[inline]
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.inner.encoding_key
    }

    /// Returns a reference to the decoding key.
    ///
    /// This key is used to verify session tokens.
    #[inline]
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.inner.decoding_key
    }
}

impl fmt::Debug for AuthKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material is intentionally not printed
        f.debug_struct("AuthKeys").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_secret() {
        let keys = AuthKeys::from_secret(&[0x5au8; 48]);
        assert!(keys.is_ok());
    }

    #[test]
    fn rejects_short_secret() {
        let result = AuthKeys::from_secret(b"too short");
        assert!(matches!(
            result,
            Err(AuthKeysError::SecretTooShort { min: 32, len: 9 })
        ));
    }

    #[test]
    fn debug_does_not_leak_key_material() {
        let keys = AuthKeys::from_secret(&[0x42u8; 32]).unwrap();
        let debug = format!("{:?}", keys);
        assert!(!debug.contains("42"));
    }
}
