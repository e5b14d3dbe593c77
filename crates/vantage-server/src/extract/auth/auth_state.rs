//! Authentication gate with credential-store verification.
//!
//! Pure token validation deliberately never touches the store, which means
//! a token issued before an account was deactivated would otherwise stay
//! usable for its full lifetime. This extractor is the point-of-use
//! enforcement: it validates the token *and* re-checks the account row
//! before any protected handler runs.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use derive_more::Deref;
use vantage_postgres::PgClient;

use super::{AuthClaims, AuthHeader};
use crate::handler::{Error, Result};
use crate::service::{AuthKeys, AuthService, IdentityContext};

/// Authenticated request state with credential-store verification.
///
/// Extraction succeeds only when the bearer token is cryptographically
/// valid *and* the referenced account still exists, is active, and holds
/// the role recorded in the claims. Handlers receive the verified claims
/// and derive the [`IdentityContext`] for ownership checks.
#[must_use]
#[derive(Debug, Clone, Deref, PartialEq, Eq)]
pub struct AuthState(pub AuthClaims);

impl AuthState {
    /// Returns the request-scoped identity for ownership checks.
    #[inline]
    pub fn identity(&self) -> IdentityContext {
        IdentityContext::from(&self.0)
    }
}

impl<S> FromRequestParts<S> for AuthState
where
    S: Sync + Send + 'static,
    PgClient: FromRef<S>,
    AuthService: FromRef<S>,
    AuthKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Check for cached auth state to avoid repeated database queries
        if let Some(auth_state) = parts.extensions.get::<Self>() {
            return Ok(auth_state.clone());
        }

        // Validate the token itself, then re-check the account row
        let auth_header = AuthHeader::from_request_parts(parts, state).await?;
        let auth_service = AuthService::from_ref(state);
        let pg_client = PgClient::from_ref(state);

        let mut conn = pg_client.get_connection().await?;
        let claims = auth_header.into_auth_claims();
        auth_service.verify_claims(&mut *conn, &claims).await?;

        let auth_state = Self(claims);

        // Cache the verified state for subsequent extractors in the same request
        parts.extensions.insert(auth_state.clone());
        Ok(auth_state)
    }
}

impl aide::OperationInput for AuthState {}
