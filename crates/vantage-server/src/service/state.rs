//! Application state and dependency injection.

use vantage_postgres::PgClient;

use crate::service::{AuthKeys, AuthService, MediaStore, Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    auth_service: AuthService,
    media_store: MediaStore,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres()?,
            auth_service: config.auth_service()?,
            media_store: config.media_store(),
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(auth_service: AuthService);
impl_di!(media_store: MediaStore);

impl axum::extract::FromRef<ServiceState> for AuthKeys {
    fn from_ref(state: &ServiceState) -> Self {
        state.auth_service.auth_keys().clone()
    }
}
