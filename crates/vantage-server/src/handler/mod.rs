//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! Reads on listings and media are public; registration and login are the
//! public authentication surface; everything else authenticates through the
//! [`AuthState`] extractor before running.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler
//! [`AuthState`]: crate::extract::AuthState

mod accounts;
mod authentication;
mod error;
mod media_files;
mod properties;
pub mod request;
pub mod response;

use aide::axum::ApiRouter;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all routes.
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(authentication::routes())
        .merge(accounts::routes())
        .merge(properties::routes())
        .merge(media_files::routes())
        .fallback(fallback)
}

#[cfg(test)]
pub(crate) mod tests {
    use aide::openapi::OpenApi;
    use axum_test::TestServer;

    use super::*;
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] with the given router.
    pub async fn create_test_server_with_router(
        router: ApiRouter<ServiceState>,
    ) -> anyhow::Result<TestServer> {
        let config = ServiceConfig::default();
        let state = ServiceState::from_config(&config).await?;

        let mut api = OpenApi::default();
        let app = router.finish_api(&mut api).with_state(state);
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] with the default router and state.
    pub async fn create_test_server() -> anyhow::Result<TestServer> {
        create_test_server_with_router(routes()).await
    }

    #[tokio::test]
    async fn router_assembles() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        assert!(server.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_routes_fall_back_to_not_found() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let response = server.get("/definitely/not/a/route").await;
        response.assert_status_not_found();
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn full_listing_lifecycle() -> anyhow::Result<()> {
        use axum::http::StatusCode;

        let server = create_test_server().await?;

        // Register an agent and log in
        let register = serde_json::json!({
            "emailAddress": "lifecycle@example.com",
            "password": "longsecret1",
            "firstName": "Ada",
            "lastName": "Mercer",
            "role": "agent"
        });
        server
            .post("/auth/register")
            .json(&register)
            .await
            .assert_status(StatusCode::CREATED);

        let login = server
            .post("/auth/login")
            .json(&serde_json::json!({
                "emailAddress": "lifecycle@example.com",
                "password": "longsecret1"
            }))
            .await;
        login.assert_status_ok();
        let session: serde_json::Value = login.json();
        let token = session["token"].as_str().unwrap_or_default().to_owned();
        let bearer = format!("Bearer {}", token);

        // The token authenticates the profile endpoint
        let profile = server
            .get("/accounts/me")
            .add_header("Authorization", bearer.as_str())
            .await;
        profile.assert_status_ok();
        let profile: serde_json::Value = profile.json();
        assert_eq!(profile["emailAddress"], "lifecycle@example.com");
        assert!(profile.get("passwordHash").is_none());

        // Create, update, and delete a listing with ownership enforced
        let create = server
            .post("/properties")
            .add_header("Authorization", bearer.as_str())
            .json(&serde_json::json!({
                "title": "Sunny bungalow",
                "price": 250000.0,
                "streetAddress": "1 Main St",
                "city": "Boise",
                "stateRegion": "ID",
                "postalCode": "83702",
                "kind": "house"
            }))
            .await;
        create.assert_status(StatusCode::CREATED);
        let listing: serde_json::Value = create.json();
        let property_id = listing["propertyId"].as_str().unwrap_or_default().to_owned();

        let update = server
            .patch(&format!("/properties/{}", property_id))
            .add_header("Authorization", bearer.as_str())
            .json(&serde_json::json!({ "status": "pending" }))
            .await;
        update.assert_status_ok();

        let delete = server
            .delete(&format!("/properties/{}", property_id))
            .add_header("Authorization", bearer.as_str())
            .await;
        delete.assert_status(StatusCode::NO_CONTENT);

        Ok(())
    }
}
