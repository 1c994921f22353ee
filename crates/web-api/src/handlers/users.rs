use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Response,
};
use domain::{EntityId, User};

use crate::{
    error::ApiError,
    extract::{optional_id, required_id, JsonBody},
    response::{Operation, Reply, Resource, Route},
    state::AppState,
};

const CREATE: Route = Route::new(Resource::User, Operation::Create);
const LIST: Route = Route::new(Resource::User, Operation::List);
const GET: Route = Route::new(Resource::User, Operation::Get);
const UPDATE: Route = Route::new(Resource::User, Operation::Update);
const DELETE: Route = Route::new(Resource::User, Operation::Delete);

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<JsonBody<User>, ApiError>,
) -> Response {
    state.render(CREATE, create(&state, body).await)
}

pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match optional_id(&params, Resource::User) {
        None => state.render(LIST, list(&state).await),
        Some(Ok(id)) => state.render(GET, get(&state, id).await),
        Some(Err(err)) => state.render(GET, Err(err)),
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    body: Result<JsonBody<User>, ApiError>,
) -> Response {
    state.render(UPDATE, update(&state, body).await)
}

pub async fn delete_user(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.render(DELETE, delete(&state, &params).await)
}

async fn create(
    state: &AppState,
    body: Result<JsonBody<User>, ApiError>,
) -> Result<Reply, ApiError> {
    let JsonBody(user) = body?;
    let created = state
        .user_usecase
        .create_user(user.clone())
        .await
        .map_err(|err| ApiError::from(err).with_submitted(&user))?;
    Reply::with_data("Success add User", &created)
}

async fn list(state: &AppState) -> Result<Reply, ApiError> {
    let users = state.user_usecase.list_users().await?;
    Reply::with_data("Success get all user", &users)
}

async fn get(state: &AppState, id: EntityId) -> Result<Reply, ApiError> {
    let user = state.user_usecase.get_user(id).await?;
    Reply::with_data("Success get user by id", &user)
}

async fn update(
    state: &AppState,
    body: Result<JsonBody<User>, ApiError>,
) -> Result<Reply, ApiError> {
    let JsonBody(user) = body?;
    let updated = state
        .user_usecase
        .update_user(user.clone())
        .await
        .map_err(|err| ApiError::from(err).with_submitted(&user))?;
    Reply::with_data("Success Update User", &updated)
}

async fn delete(state: &AppState, params: &HashMap<String, String>) -> Result<Reply, ApiError> {
    let id = required_id(params, Resource::User)?;
    state.user_usecase.delete_user(id).await?;
    Ok(Reply::message("Success delete the user"))
}
