use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Response,
};
use domain::{EntityId, Event};

use crate::{
    error::ApiError,
    extract::{optional_id, JsonBody},
    response::{Operation, Reply, Resource, Route},
    state::AppState,
};

const CREATE: Route = Route::new(Resource::Event, Operation::Create);
const LIST: Route = Route::new(Resource::Event, Operation::List);
const GET: Route = Route::new(Resource::Event, Operation::Get);

pub async fn create_event(
    State(state): State<AppState>,
    body: Result<JsonBody<Event>, ApiError>,
) -> Response {
    state.render(CREATE, create(&state, body).await)
}

/// `GET /events` 返回列表，`GET /events?id=` 返回单个活动
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match optional_id(&params, Resource::Event) {
        None => state.render(LIST, list(&state).await),
        Some(Ok(id)) => state.render(GET, get(&state, id).await),
        Some(Err(err)) => state.render(GET, Err(err)),
    }
}

async fn create(
    state: &AppState,
    body: Result<JsonBody<Event>, ApiError>,
) -> Result<Reply, ApiError> {
    let JsonBody(event) = body?;
    let created = state
        .event_usecase
        .create_event(event.clone())
        .await
        .map_err(|err| ApiError::from(err).with_submitted(&event))?;
    Reply::with_data("Success create event", &created)
}

async fn list(state: &AppState) -> Result<Reply, ApiError> {
    let events = state.event_usecase.list_events().await?;
    Reply::with_data("Success get all events", &events)
}

async fn get(state: &AppState, id: EntityId) -> Result<Reply, ApiError> {
    let event = state.event_usecase.get_event(id).await?;
    Reply::with_data("Success get event by id", &event)
}
