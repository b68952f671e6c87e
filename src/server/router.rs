use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{auth, event, health, playlist, song},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Playlist Collab API",
        description = "Collaborative Spotify playlists with owner-moderated song submissions"
    ),
    paths(
        health::health,
        auth::login,
        auth::callback,
        auth::get_user,
        playlist::create_playlist,
        playlist::list_playlists,
        playlist::get_playlist,
        playlist::rename_playlist,
        playlist::delete_playlist,
        playlist::update_playlist_config,
        playlist::get_playlist_by_code,
        song::submit_song,
        song::decide_song,
        song::list_songs,
        song::list_blacklist,
        song::blacklist_song,
        song::unblacklist_song,
        event::create_event,
        event::list_events,
        event::get_event,
        event::rename_event,
        event::delete_event,
        event::get_event_by_code,
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Spotify login and the authenticated user"),
        (name = "playlist", description = "Playlist management and join codes"),
        (name = "song", description = "Song submission and moderation"),
        (name = "event", description = "Events grouping a playlist under a code"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(openapi))
        .route("/auth/spotify/login", get(auth::login))
        .route("/auth/spotify/callback", get(auth::callback))
        .route("/auth/user", get(auth::get_user))
        .route(
            "/playlists",
            post(playlist::create_playlist).get(playlist::list_playlists),
        )
        .route("/playlists/config", patch(playlist::update_playlist_config))
        .route("/playlists/code/{code}", get(playlist::get_playlist_by_code))
        .route(
            "/playlists/{id}",
            get(playlist::get_playlist)
                .post(playlist::rename_playlist)
                .delete(playlist::delete_playlist),
        )
        .route("/songs", get(song::list_songs))
        .route("/songs/add", post(song::submit_song))
        .route(
            "/songs/blacklist",
            get(song::list_blacklist)
                .post(song::blacklist_song)
                .delete(song::unblacklist_song),
        )
        .route("/songs/{decision}", post(song::decide_song))
        .route("/events", post(event::create_event).get(event::list_events))
        .route("/events/code/{code}", get(event::get_event_by_code))
        .route(
            "/events/{id}",
            get(event::get_event)
                .post(event::rename_event)
                .delete(event::delete_event),
        )
}
