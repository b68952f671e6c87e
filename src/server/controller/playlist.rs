use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        playlist::{
            CreatePlaylistDto, CreatedPlaylistDto, PlaylistDto, PublicPlaylistDto,
            UpdatePlaylistConfigDto, UpdatePlaylistDto,
        },
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::auth::AuthGuard,
        model::playlist::{CreatePlaylistParams, UpdatePlaylistConfigParams},
        service::{coordinator::PlaylistMutationCoordinator, playlist::PlaylistService},
        state::AppState,
        util::deadline::RequestDeadline,
    },
};

/// Tag for grouping playlist endpoints in OpenAPI documentation
pub static PLAYLIST_TAG: &str = "playlist";

/// Create a playlist.
///
/// Creates the playlist on the caller's Spotify account, then records it locally
/// with a fresh join code and the default configuration. If the caller's token
/// had to be refreshed, the new token is included in the response.
///
/// # Returns
/// - `201 Created` - Playlist created
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `422 Unprocessable Entity` - Empty name or no linked Spotify account
/// - `502 Bad Gateway` - Spotify call failed; nothing was stored
/// - `503 Service Unavailable` - Deadline exceeded; nothing was stored
#[utoipa::path(
    post,
    path = "/playlists",
    tag = PLAYLIST_TAG,
    request_body = CreatePlaylistDto,
    params(
        ("X-Request-Timeout-Ms" = Option<u64>, Header, description = "Shortens the operation deadline")
    ),
    responses(
        (status = 201, description = "Playlist created", body = CreatedPlaylistDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 422, description = "Invalid playlist data", body = ErrorDto),
        (status = 502, description = "Spotify call failed", body = ErrorDto),
        (status = 503, description = "Deadline exceeded", body = ErrorDto)
    ),
)]
pub async fn create_playlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePlaylistDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;
    let deadline = RequestDeadline::from_headers(&headers, state.config.request_timeout);

    let coordinator = PlaylistMutationCoordinator::new(
        &state.db,
        state.spotify.as_ref(),
        state.config.token_expiry_skew,
    );
    let creation = coordinator
        .create_playlist(CreatePlaylistParams::from_dto(user.id, payload), deadline.0)
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        "Playlist created",
        creation.into_dto(),
    ))
}

/// List the caller's playlists.
#[utoipa::path(
    get,
    path = "/playlists",
    tag = PLAYLIST_TAG,
    responses(
        (status = 200, description = "Owned playlists", body = Vec<PlaylistDto>),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto)
    ),
)]
pub async fn list_playlists(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let playlists = PlaylistService::new(&state.db).list(user.id).await?;
    let dtos: Vec<PlaylistDto> = playlists.into_iter().map(|p| p.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Playlists", dtos))
}

/// Get one of the caller's playlists.
///
/// # Returns
/// - `200 OK` - Playlist with configuration
/// - `403 Forbidden` - Playlist belongs to another user
/// - `404 Not Found` - No playlist with that id
#[utoipa::path(
    get,
    path = "/playlists/{id}",
    tag = PLAYLIST_TAG,
    params(("id" = i32, Path, description = "Playlist id")),
    responses(
        (status = 200, description = "Playlist", body = PlaylistDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto)
    ),
)]
pub async fn get_playlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(playlist_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let playlist = PlaylistService::new(&state.db).get(user.id, playlist_id).await?;

    Ok(respond(StatusCode::OK, "Playlist", playlist.into_dto()))
}

/// Rename one of the caller's playlists.
///
/// Only the local name changes; the Spotify playlist keeps its name.
#[utoipa::path(
    post,
    path = "/playlists/{id}",
    tag = PLAYLIST_TAG,
    params(("id" = i32, Path, description = "Playlist id")),
    request_body = UpdatePlaylistDto,
    responses(
        (status = 200, description = "Playlist renamed", body = PlaylistDto),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto),
        (status = 422, description = "Empty name", body = ErrorDto)
    ),
)]
pub async fn rename_playlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(playlist_id): Path<i32>,
    Json(payload): Json<UpdatePlaylistDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let playlist = PlaylistService::new(&state.db)
        .rename(user.id, playlist_id, payload.name)
        .await?;

    Ok(respond(StatusCode::OK, "Playlist renamed", playlist.into_dto()))
}

/// Delete one of the caller's playlists.
///
/// Removes the local record with its configuration and songs. The playlist is
/// left on Spotify.
#[utoipa::path(
    delete,
    path = "/playlists/{id}",
    tag = PLAYLIST_TAG,
    params(("id" = i32, Path, description = "Playlist id")),
    responses(
        (status = 204, description = "Playlist deleted"),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto)
    ),
)]
pub async fn delete_playlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(playlist_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    PlaylistService::new(&state.db)
        .delete(user.id, playlist_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update the submission rules of one of the caller's playlists.
///
/// Fields left out of the body keep their current value.
#[utoipa::path(
    patch,
    path = "/playlists/config",
    tag = PLAYLIST_TAG,
    request_body = UpdatePlaylistConfigDto,
    responses(
        (status = 200, description = "Configuration updated", body = PlaylistDto),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto),
        (status = 422, description = "Invalid configuration", body = ErrorDto)
    ),
)]
pub async fn update_playlist_config(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdatePlaylistConfigDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let playlist = PlaylistService::new(&state.db)
        .update_config(user.id, UpdatePlaylistConfigParams::from_dto(payload))
        .await?;

    Ok(respond(
        StatusCode::OK,
        "Playlist configuration updated",
        playlist.into_dto(),
    ))
}

/// Look up a playlist by join code.
///
/// Anonymous; returns only what a participant needs to submit songs.
#[utoipa::path(
    get,
    path = "/playlists/code/{code}",
    tag = PLAYLIST_TAG,
    params(("code" = String, Path, description = "Six character join code")),
    responses(
        (status = 200, description = "Playlist", body = PublicPlaylistDto),
        (status = 404, description = "No playlist with that code", body = ErrorDto)
    ),
)]
pub async fn get_playlist_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let playlist = PlaylistService::new(&state.db).get_by_code(&code).await?;

    Ok(respond(StatusCode::OK, "Playlist", playlist.into_public_dto()))
}
