use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto, PublicEventDto, UpdateEventDto},
    },
    server::{
        controller::respond, error::AppError, middleware::auth::AuthGuard,
        model::event::CreateEventParams, service::event::EventService, state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Create an event.
///
/// The event gets its own join code and may be linked to one of the caller's
/// playlists.
#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Linked playlist belongs to another user", body = ErrorDto),
        (status = 422, description = "Empty name", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let event = EventService::new(&state.db)
        .create(CreateEventParams::from_dto(user.id, payload))
        .await?;

    Ok(respond(StatusCode::CREATED, "Event created", event.into_dto()))
}

#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Owned events", body = Vec<EventDto>),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let events = EventService::new(&state.db).list(user.id).await?;
    let dtos: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Events", dtos))
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 403, description = "Event belongs to another user", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let event = EventService::new(&state.db).get(user.id, event_id).await?;

    Ok(respond(StatusCode::OK, "Event", event.into_dto()))
}

#[utoipa::path(
    post,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event renamed", body = EventDto),
        (status = 403, description = "Event belongs to another user", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Empty name", body = ErrorDto)
    ),
)]
pub async fn rename_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    let event = EventService::new(&state.db)
        .rename(user.id, event_id, payload.name)
        .await?;

    Ok(respond(StatusCode::OK, "Event renamed", event.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Event belongs to another user", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    EventService::new(&state.db).delete(user.id, event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Look up an event by its code.
///
/// Anonymous; includes the join code of the linked playlist, if any.
#[utoipa::path(
    get,
    path = "/events/code/{code}",
    tag = EVENT_TAG,
    params(("code" = String, Path, description = "Event code")),
    responses(
        (status = 200, description = "Event", body = PublicEventDto),
        (status = 404, description = "No event with that code", body = ErrorDto)
    ),
)]
pub async fn get_event_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = EventService::new(&state.db).get_by_code(&code).await?;

    Ok(respond(StatusCode::OK, "Event", lookup.into_dto()))
}
