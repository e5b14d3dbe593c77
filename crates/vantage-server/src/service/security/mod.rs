//! Cryptographic primitives for the authentication core.

mod auth_keys;
mod password_hasher;

pub use auth_keys::{AuthKeys, AuthKeysError};
pub use password_hasher::{HashingError, PasswordHasher};
