//! Request handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use koyomi_core::{Event, EventId, EventInput};
use koyomi_events::{merge_events, month_range};
use koyomi_time::date::check_year;
use koyomi_time::holiday::equinox_is_estimated;
use koyomi_time::{Calendar, Holiday};
use tracing::{debug, warn};

use crate::error::ServerError;
use crate::state::AppState;

type ApiResult<T> = Result<T, ServerError>;

fn parse_year(raw: &str) -> ApiResult<i32> {
    raw.parse()
        .map_err(|_| ServerError::InvalidRequest("Invalid year".to_string()))
}

fn parse_month(raw: &str) -> ApiResult<u32> {
    raw.parse()
        .map_err(|_| ServerError::InvalidRequest("Invalid month".to_string()))
}

fn parse_id(raw: &str) -> ApiResult<EventId> {
    raw.parse()
        .map_err(|_| ServerError::InvalidRequest("Invalid event ID".to_string()))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /api/calendar/:year/:month`
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(String, String)>,
) -> ApiResult<Json<Calendar>> {
    let year = parse_year(&year)?;
    let month = parse_month(&month)?;
    let mut calendar = state.calendars.build(year, month)?;

    if let Some((start, end)) = month_range(&calendar) {
        let events = state.events.events_between(start, end).await?;
        merge_events(&mut calendar, &events);
    }
    debug!(year, month, "calendar built");
    Ok(Json(calendar))
}

/// `GET /api/holidays/:year`
pub async fn get_holidays(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> ApiResult<Json<Vec<Holiday>>> {
    let year = check_year(parse_year(&year)?)?;
    if equinox_is_estimated(year) {
        warn!(year, "equinox dates are fixed estimates outside 2000-2099");
    }
    Ok(Json(state.holidays.holidays(year)))
}

/// `GET /api/events`
pub async fn list_events(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.events.all_events().await?))
}

/// `POST /api/events`
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let Json(input) = payload?;
    let event = state.events.create_event(input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// `GET /api/events/:id`
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    let id = parse_id(&id)?;
    Ok(Json(state.events.event(id).await?))
}

/// `PUT /api/events/:id`
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> ApiResult<Json<Event>> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;
    Ok(Json(state.events.update_event(id, input).await?))
}

/// `DELETE /api/events/:id`
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.events.delete_event(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
