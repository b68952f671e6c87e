use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        song::{
            BlacklistQuery, BlacklistSongDto, SongDecisionDto, SongDecisionRequestDto, SongDto,
            SongListQuery, SubmitSongDto,
        },
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::auth::AuthGuard,
        model::song::{SongDecision, SongDecisionParams, SongStatus, SubmitSongParams},
        service::{coordinator::PlaylistMutationCoordinator, song::SongService},
        state::AppState,
        util::deadline::RequestDeadline,
    },
};

/// Tag for grouping song endpoints in OpenAPI documentation
pub static SONG_TAG: &str = "song";

fn song_service(state: &AppState) -> SongService<'_> {
    SongService::new(
        &state.db,
        state.spotify.as_ref(),
        state.config.token_expiry_skew,
    )
}

/// Submit a song to a playlist.
///
/// Anonymous. The song is stored pending, or accepted right away when the
/// playlist does not require approval.
///
/// # Returns
/// - `201 Created` - Song stored
/// - `404 Not Found` - No playlist with that code
/// - `409 Conflict` - Song already submitted
/// - `422 Unprocessable Entity` - Invalid URI, blacklisted, explicit or playlist full
#[utoipa::path(
    post,
    path = "/songs/add",
    tag = SONG_TAG,
    request_body = SubmitSongDto,
    responses(
        (status = 201, description = "Song submitted", body = SongDto),
        (status = 404, description = "No playlist with that code", body = ErrorDto),
        (status = 409, description = "Song already submitted", body = ErrorDto),
        (status = 422, description = "Song not allowed on this playlist", body = ErrorDto),
        (status = 503, description = "Deadline exceeded", body = ErrorDto)
    ),
)]
pub async fn submit_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitSongDto>,
) -> Result<impl IntoResponse, AppError> {
    let deadline = RequestDeadline::from_headers(&headers, state.config.request_timeout);

    let song = song_service(&state)
        .submit(
            SubmitSongParams {
                playlist_code: payload.playlist_code,
                song_uri: payload.song_uri,
            },
            deadline.0,
        )
        .await?;

    Ok(respond(StatusCode::CREATED, "Song submitted", song.into_dto()))
}

/// Accept or reject a submitted song.
///
/// Accepting adds the track to the Spotify playlist; the song is only marked
/// accepted once Spotify has taken it. Rejecting only changes the stored status.
///
/// # Returns
/// - `200 OK` - Decision recorded
/// - `403 Forbidden` - Playlist belongs to another user
/// - `404 Not Found` - Playlist or song not found
/// - `422 Unprocessable Entity` - Unknown decision or blacklisted song
/// - `502 Bad Gateway` - Spotify call failed; nothing changed
/// - `503 Service Unavailable` - Deadline exceeded; nothing changed
#[utoipa::path(
    post,
    path = "/songs/{decision}",
    tag = SONG_TAG,
    params(
        ("decision" = String, Path, description = "`accept` or `reject`"),
        ("X-Request-Timeout-Ms" = Option<u64>, Header, description = "Shortens the operation deadline")
    ),
    request_body = SongDecisionRequestDto,
    responses(
        (status = 200, description = "Decision recorded", body = SongDecisionDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Playlist or song not found", body = ErrorDto),
        (status = 422, description = "Invalid decision", body = ErrorDto),
        (status = 502, description = "Spotify call failed", body = ErrorDto),
        (status = 503, description = "Deadline exceeded", body = ErrorDto)
    ),
)]
pub async fn decide_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(decision): Path<String>,
    Json(payload): Json<SongDecisionRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;
    let decision = SongDecision::parse(&decision)?;
    let deadline = RequestDeadline::from_headers(&headers, state.config.request_timeout);

    let coordinator = PlaylistMutationCoordinator::new(
        &state.db,
        state.spotify.as_ref(),
        state.config.token_expiry_skew,
    );
    let outcome = coordinator
        .decide_song(
            SongDecisionParams {
                playlist_id: payload.playlist_id,
                song_uri: payload.song_uri,
                decision,
                user_id: user.id,
            },
            deadline.0,
        )
        .await?;

    Ok(respond(StatusCode::OK, "Decision recorded", outcome.into_dto()))
}

/// List the songs of one of the caller's playlists.
#[utoipa::path(
    get,
    path = "/songs",
    tag = SONG_TAG,
    params(SongListQuery),
    responses(
        (status = 200, description = "Songs in submission order", body = Vec<SongDto>),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto)
    ),
)]
pub async fn list_songs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SongListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let songs = song_service(&state)
        .list(user.id, query.playlist_id, query.status.map(SongStatus::from_dto))
        .await?;
    let dtos: Vec<SongDto> = songs.into_iter().map(|s| s.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Songs", dtos))
}

/// List the blacklisted songs of one of the caller's playlists.
#[utoipa::path(
    get,
    path = "/songs/blacklist",
    tag = SONG_TAG,
    params(BlacklistQuery),
    responses(
        (status = 200, description = "Blacklisted songs", body = Vec<SongDto>),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto)
    ),
)]
pub async fn list_blacklist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BlacklistQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let songs = song_service(&state)
        .list_blacklist(user.id, query.playlist_id)
        .await?;
    let dtos: Vec<SongDto> = songs.into_iter().map(|s| s.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Blacklisted songs", dtos))
}

/// Blacklist a song on one of the caller's playlists.
#[utoipa::path(
    post,
    path = "/songs/blacklist",
    tag = SONG_TAG,
    request_body = BlacklistSongDto,
    responses(
        (status = 200, description = "Song blacklisted", body = SongDto),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Playlist not found", body = ErrorDto),
        (status = 422, description = "Invalid song URI", body = ErrorDto)
    ),
)]
pub async fn blacklist_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BlacklistSongDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let song = song_service(&state)
        .blacklist(user.id, payload.playlist_id, &payload.song_uri)
        .await?;

    Ok(respond(StatusCode::OK, "Song blacklisted", song.into_dto()))
}

/// Remove a song from the blacklist of one of the caller's playlists.
#[utoipa::path(
    delete,
    path = "/songs/blacklist",
    tag = SONG_TAG,
    request_body = BlacklistSongDto,
    responses(
        (status = 200, description = "Song removed from blacklist", body = SongDto),
        (status = 403, description = "Playlist belongs to another user", body = ErrorDto),
        (status = 404, description = "Song is not blacklisted", body = ErrorDto)
    ),
)]
pub async fn unblacklist_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BlacklistSongDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let song = song_service(&state)
        .remove_from_blacklist(user.id, payload.playlist_id, &payload.song_uri)
        .await?;

    Ok(respond(
        StatusCode::OK,
        "Song removed from blacklist",
        song.into_dto(),
    ))
}
