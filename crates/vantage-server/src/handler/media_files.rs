//! Property media upload and retrieval handlers.
//!
//! Uploads are validated against an extension allowlist and a size cap,
//! written to local disk under a server-generated name, and recorded in the
//! database. A failed database insert removes the just-written file so disk
//! and database stay consistent.

use aide::axum::ApiRouter;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use vantage_postgres::PgClient;
use vantage_postgres::model::NewMediaFile;
use vantage_postgres::query::{MediaFileRepository, PropertyRepository};

use crate::extract::{AuthState, Json};
use crate::handler::response::MediaFile;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{MediaStore, ServiceState};

/// Tracing target for media operations.
const TRACING_TARGET: &str = "vantage_server::handler::media_files";

/// Multipart field name carrying the uploaded file.
const FILE_FIELD: &str = "file";

/// Reads the uploaded file out of the multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<(String, axum::body::Bytes)> {
    let to_error = |e: axum::extract::multipart::MultipartError| -> Error<'static> {
        ErrorKind::BadRequest
            .with_message("Malformed multipart body")
            .with_context(e.to_string())
    };

    while let Some(field) = multipart.next_field().await.map_err(to_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let Some(original_name) = field.file_name().map(str::to_owned) else {
            return Err(ErrorKind::BadRequest
                .with_message("Uploaded field is missing a file name")
                .with_resource("media"));
        };
        let bytes = field.bytes().await.map_err(to_error)?;
        return Ok((original_name, bytes));
    }

    Err(ErrorKind::BadRequest
        .with_message(format!(
            "Multipart body must contain a '{}' field",
            FILE_FIELD
        ))
        .with_resource("media"))
}

/// Uploads a media file to a listing owned by the authenticated account.
#[tracing::instrument(skip_all)]
async fn upload_property_media(
    State(pg_client): State<PgClient>,
    State(media_store): State<MediaStore>,
    Path(property_id): Path<Uuid>,
    auth_state: AuthState,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MediaFile>)> {
    tracing::trace!(
        target: TRACING_TARGET,
        property_id = %property_id,
        account_id = %auth_state.account_id,
        "media upload attempt"
    );

    let mut conn = pg_client.get_connection().await?;
    let Some(property) = conn.find_property_by_id(property_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Listing not found")
            .with_resource("property"));
    };
    auth_state.identity().authorize_owner(property.owner_id)?;

    let (original_name, bytes) = read_upload(multipart).await?;
    media_store.validate(&original_name, bytes.len() as u64)?;

    let file_name = MediaStore::unique_file_name(&original_name);
    media_store.save(&file_name, &bytes).await?;

    let new_media_file = NewMediaFile {
        property_id,
        file_url: media_store.public_url(&file_name),
        kind: Some(MediaStore::classify(&original_name)),
        file_size: bytes.len() as i64,
        file_name: file_name.clone(),
    };

    let media_file = match conn.create_media_file(new_media_file).await {
        Ok(media_file) => media_file,
        Err(e) => {
            // Keep disk and database consistent: drop the orphaned file
            if let Err(cleanup) = media_store.remove(&file_name).await {
                tracing::warn!(
                    target: TRACING_TARGET,
                    file_name = %file_name,
                    error = %cleanup,
                    "failed to remove file after insert failure"
                );
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        target: TRACING_TARGET,
        media_file_id = %media_file.id,
        property_id = %property_id,
        file_size = media_file.file_size,
        "media file uploaded"
    );

    Ok((StatusCode::CREATED, Json(MediaFile::from_model(media_file))))
}

/// Lists the active media files attached to a listing.
#[tracing::instrument(skip_all)]
async fn list_property_media(
    State(pg_client): State<PgClient>,
    Path(property_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Vec<MediaFile>>)> {
    let mut conn = pg_client.get_connection().await?;

    if conn.find_property_by_id(property_id).await?.is_none() {
        return Err(ErrorKind::NotFound
            .with_message("Listing not found")
            .with_resource("property"));
    }

    let media_files = conn.list_media_files_by_property(property_id).await?;
    let media_files = media_files.into_iter().map(MediaFile::from_model).collect();

    Ok((StatusCode::OK, Json(media_files)))
}

/// Deletes a media file from a listing owned by the authenticated account.
#[tracing::instrument(skip_all)]
async fn delete_media_file(
    State(pg_client): State<PgClient>,
    State(media_store): State<MediaStore>,
    Path(media_file_id): Path<Uuid>,
    auth_state: AuthState,
) -> Result<StatusCode> {
    tracing::trace!(
        target: TRACING_TARGET,
        media_file_id = %media_file_id,
        account_id = %auth_state.account_id,
        "media delete attempt"
    );

    let mut conn = pg_client.get_connection().await?;
    let Some(media_file) = conn.find_media_file_by_id(media_file_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Media file not found")
            .with_resource("media"));
    };

    // Ownership follows the parent listing
    let Some(property) = conn.find_property_by_id(media_file.property_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Listing not found")
            .with_resource("property"));
    };
    auth_state.identity().authorize_owner(property.owner_id)?;

    conn.delete_media_file(media_file_id).await?;

    // Best-effort disk cleanup; the soft-deleted row no longer references it
    if let Err(e) = media_store.remove(&media_file.file_name).await {
        tracing::warn!(
            target: TRACING_TARGET,
            media_file_id = %media_file_id,
            error = %e,
            "failed to remove media file from disk"
        );
    }

    tracing::info!(
        target: TRACING_TARGET,
        media_file_id = %media_file_id,
        property_id = %media_file.property_id,
        "media file deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/properties/{property_id}/media", post(upload_property_media))
        .api_route("/properties/{property_id}/media", get(list_property_media))
        .api_route("/media/{media_file_id}", delete(delete_media_file))
        // The store's own cap is authoritative; this just keeps axum from
        // rejecting bodies below it
        .layer(DefaultBodyLimit::max(
            MediaStore::DEFAULT_MAX_BYTES as usize + 64 * 1024,
        ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::handler::tests::create_test_server_with_router;

    #[tokio::test]
    async fn upload_requires_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server
            .post(&format!("/properties/{}/media", Uuid::new_v4()))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn delete_requires_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.delete(&format!("/media/{}", Uuid::new_v4())).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        Ok(())
    }
}
