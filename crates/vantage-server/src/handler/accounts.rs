//! Account profile handlers.

use aide::axum::ApiRouter;
use axum::extract::State;
use axum::http::StatusCode;
use vantage_postgres::PgClient;

use crate::extract::{AuthState, Json};
use crate::handler::Result;
use crate::handler::response::Account;
use crate::service::{AuthService, ServiceState};

/// Tracing target for account operations.
const TRACING_TARGET: &str = "vantage_server::handler::accounts";

/// Retrieves the authenticated account's profile.
///
/// Materializes a fresh view from the store rather than echoing token
/// claims, so a profile read always reflects the current row.
#[tracing::instrument(skip_all)]
async fn get_own_account(
    State(pg_client): State<PgClient>,
    State(auth_service): State<AuthService>,
    auth_state: AuthState,
) -> Result<(StatusCode, Json<Account>)> {
    tracing::trace!(
        target: TRACING_TARGET,
        account_id = %auth_state.account_id,
        "retrieving own account"
    );

    let mut conn = pg_client.get_connection().await?;
    let account = auth_service
        .get_account_by_id(&mut *conn, auth_state.account_id)
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        account_id = %account.id,
        "account retrieved"
    );

    Ok((StatusCode::OK, Json(Account::from_model(account))))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new().api_route("/accounts/me", get(get_own_account))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::handler::tests::create_test_server_with_router;

    #[tokio::test]
    async fn profile_requires_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/accounts/me").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .get("/accounts/me")
            .add_header("Authorization", "Bearer not.a.token")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        Ok(())
    }
}
