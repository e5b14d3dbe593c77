//! Application services and dependency injection.

pub mod auth;
mod config;
mod media_store;
mod security;
mod state;
mod tracing;

pub use crate::service::auth::{
    AuthError, AuthService, CredentialStore, IdentityContext, MIN_SECRET_LENGTH, NewRegistration,
};
pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
pub use crate::service::media_store::{MediaError, MediaStore};
pub use crate::service::security::{AuthKeys, AuthKeysError, HashingError, PasswordHasher};
pub use crate::service::state::ServiceState;
pub use crate::service::tracing::initialize_tracing;

/// Errors raised while assembling application services from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A configuration value was rejected.
    #[error("invalid service configuration: {0}")]
    Config(String),

    /// The database layer could not be initialized.
    #[error(transparent)]
    Database(#[from] vantage_postgres::PgError),
}

/// Specialized [`Result`] type for service construction.
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;
