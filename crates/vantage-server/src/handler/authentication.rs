//! Authentication handlers for registration and login.
//!
//! These endpoints are the only public write surface of the authentication
//! core. Both are single-pass flows with no retries: every failure is
//! terminal for the request, and credential failures are deliberately
//! indistinguishable from one another.

use aide::axum::ApiRouter;
use axum::extract::State;
use axum::http::StatusCode;
use vantage_postgres::PgClient;

use crate::extract::{Json, ValidateJson};
use crate::handler::request::{LoginRequest, RegisterRequest};
use crate::handler::response::{Account, Session};
use crate::handler::Result;
use crate::service::{AuthService, ServiceState};

/// Tracing target for authentication operations.
const TRACING_TARGET: &str = "vantage_server::handler::authentication";

/// Creates a new account.
#[tracing::instrument(skip_all)]
async fn register(
    State(pg_client): State<PgClient>,
    State(auth_service): State<AuthService>,
    ValidateJson(request): ValidateJson<RegisterRequest>,
) -> Result<(StatusCode, Json<Account>)> {
    tracing::trace!(
        target: TRACING_TARGET,
        email = %request.email_address,
        role = %request.role,
        "registration attempt"
    );

    let mut conn = pg_client.get_connection().await?;
    let account = auth_service
        .register(&mut *conn, request.into_registration())
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        account_id = %account.id,
        email = %account.email_address,
        "account created"
    );

    Ok((StatusCode::CREATED, Json(Account::from_model(account))))
}

/// Authenticates an account and issues a session token.
#[tracing::instrument(skip_all)]
async fn login(
    State(pg_client): State<PgClient>,
    State(auth_service): State<AuthService>,
    ValidateJson(request): ValidateJson<LoginRequest>,
) -> Result<(StatusCode, Json<Session>)> {
    tracing::trace!(
        target: TRACING_TARGET,
        email = %request.email_address,
        "login attempt"
    );

    let mut conn = pg_client.get_connection().await?;
    let (token, account) = auth_service
        .login(&mut *conn, &request.email_address, &request.password)
        .await?;

    // Round-trip the freshly issued token for the response timestamps
    let claims = auth_service.validate_token(&token)?;

    tracing::info!(
        target: TRACING_TARGET,
        account_id = %account.id,
        expires_at = %claims.expires_at(),
        "login successful: session token issued"
    );

    let session = Session::new(token, &claims, Account::from_model(account));
    Ok((StatusCode::OK, Json(session)))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/auth/register", post(register))
        .api_route("/auth/login", post(login))
}
