//! Property listing handlers.
//!
//! Reads are public; every mutation requires authentication plus ownership
//! of the listing. Ownership is the only authorization rule: roles carry no
//! override.

use aide::axum::ApiRouter;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;
use vantage_postgres::PgClient;
use vantage_postgres::model;
use vantage_postgres::query::PropertyRepository;

use crate::extract::{AuthState, Json, ValidateJson};
use crate::handler::request::{CreatePropertyRequest, PaginationParams, SearchPropertiesParams, UpdatePropertyRequest};
use crate::handler::response::{Page, Property};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for property operations.
const TRACING_TARGET: &str = "vantage_server::handler::properties";

/// Looks up a listing or fails with a uniform 404.
async fn find_property(
    conn: &mut vantage_postgres::PgConnection,
    property_id: Uuid,
) -> Result<model::Property> {
    let Some(property) = conn.find_property_by_id(property_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Listing not found")
            .with_resource("property")
            .with_context(format!("Property ID: {}", property_id)));
    };
    Ok(property)
}

/// Creates a new listing owned by the authenticated account.
#[tracing::instrument(skip_all)]
async fn create_property(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<Property>)> {
    tracing::trace!(
        target: TRACING_TARGET,
        owner_id = %auth_state.account_id,
        title = %request.title,
        "creating listing"
    );

    let mut conn = pg_client.get_connection().await?;
    let new_property = request.into_new_property(auth_state.account_id);
    let property = conn.create_property(new_property).await?;

    tracing::info!(
        target: TRACING_TARGET,
        property_id = %property.id,
        owner_id = %property.owner_id,
        "listing created"
    );

    Ok((StatusCode::CREATED, Json(Property::from_model(property))))
}

/// Retrieves a single listing.
#[tracing::instrument(skip_all)]
async fn get_property(
    State(pg_client): State<PgClient>,
    Path(property_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Property>)> {
    let mut conn = pg_client.get_connection().await?;
    let property = find_property(&mut conn, property_id).await?;

    Ok((StatusCode::OK, Json(Property::from_model(property))))
}

/// Searches listings with optional filters and offset pagination.
#[tracing::instrument(skip_all)]
async fn search_properties(
    State(pg_client): State<PgClient>,
    Query(params): Query<SearchPropertiesParams>,
) -> Result<(StatusCode, Json<Page<Property>>)> {
    params.validate()?;
    let (filter, pagination) = params.into_parts();

    tracing::trace!(
        target: TRACING_TARGET,
        unfiltered = filter.is_empty(),
        page = pagination.page_number(),
        "searching listings"
    );

    let mut conn = pg_client.get_connection().await?;
    let total = conn.count_properties(&filter).await?;
    let properties = conn.search_properties(&filter, pagination).await?;

    let data = properties.into_iter().map(Property::from_model).collect();
    let page = Page::new(pagination, total, data);
    Ok((StatusCode::OK, Json(page)))
}

/// Lists the authenticated account's own listings.
#[tracing::instrument(skip_all)]
async fn list_own_properties(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    Query(params): Query<PaginationParams>,
) -> Result<(StatusCode, Json<Page<Property>>)> {
    params.validate()?;
    let pagination = params.into_pagination();
    let owner_id = auth_state.account_id;

    let mut conn = pg_client.get_connection().await?;
    let total = conn.count_properties_by_owner(owner_id).await?;
    let properties = conn.list_properties_by_owner(owner_id, pagination).await?;

    let data = properties.into_iter().map(Property::from_model).collect();
    let page = Page::new(pagination, total, data);
    Ok((StatusCode::OK, Json(page)))
}

/// Updates a listing owned by the authenticated account.
#[tracing::instrument(skip_all)]
async fn update_property(
    State(pg_client): State<PgClient>,
    Path(property_id): Path<Uuid>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<UpdatePropertyRequest>,
) -> Result<(StatusCode, Json<Property>)> {
    tracing::trace!(
        target: TRACING_TARGET,
        property_id = %property_id,
        account_id = %auth_state.account_id,
        "updating listing"
    );

    let mut conn = pg_client.get_connection().await?;
    let property = find_property(&mut conn, property_id).await?;

    auth_state.identity().authorize_owner(property.owner_id)?;

    let property = conn
        .update_property(property_id, request.into_update_property())
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        property_id = %property.id,
        "listing updated"
    );

    Ok((StatusCode::OK, Json(Property::from_model(property))))
}

/// Deletes a listing owned by the authenticated account.
#[tracing::instrument(skip_all)]
async fn delete_property(
    State(pg_client): State<PgClient>,
    Path(property_id): Path<Uuid>,
    auth_state: AuthState,
) -> Result<StatusCode> {
    tracing::trace!(
        target: TRACING_TARGET,
        property_id = %property_id,
        account_id = %auth_state.account_id,
        "deleting listing"
    );

    let mut conn = pg_client.get_connection().await?;
    let property = find_property(&mut conn, property_id).await?;

    auth_state.identity().authorize_owner(property.owner_id)?;

    conn.delete_property(property_id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        property_id = %property_id,
        "listing deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/properties", post(create_property))
        .api_route("/properties", get(search_properties))
        .api_route("/properties/mine", get(list_own_properties))
        .api_route("/properties/{property_id}", get(get_property))
        .api_route("/properties/{property_id}", patch(update_property))
        .api_route("/properties/{property_id}", delete(delete_property))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::handler::tests::create_test_server_with_router;

    #[tokio::test]
    async fn mutations_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .post("/properties")
            .json(&serde_json::json!({ "title": "x" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .delete(&format!("/properties/{}", Uuid::new_v4()))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_property_id_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/properties/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn search_rejects_negative_price_bounds() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/properties?minPrice=-5").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }
}
