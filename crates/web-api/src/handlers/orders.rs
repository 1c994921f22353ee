use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Response,
};
use domain::{EntityId, Order};

use crate::{
    error::ApiError,
    extract::{optional_id, required_id, JsonBody},
    response::{Operation, Reply, Resource, Route},
    state::AppState,
};

const CREATE: Route = Route::new(Resource::Order, Operation::Create);
const LIST: Route = Route::new(Resource::Order, Operation::List);
const GET: Route = Route::new(Resource::Order, Operation::Get);
const UPDATE: Route = Route::new(Resource::Order, Operation::Update);
const DELETE: Route = Route::new(Resource::Order, Operation::Delete);

pub async fn create_order(
    State(state): State<AppState>,
    body: Result<JsonBody<Order>, ApiError>,
) -> Response {
    state.render(CREATE, create(&state, body).await)
}

pub async fn get_orders(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match optional_id(&params, Resource::Order) {
        None => state.render(LIST, list(&state).await),
        Some(Ok(id)) => state.render(GET, get(&state, id).await),
        Some(Err(err)) => state.render(GET, Err(err)),
    }
}

pub async fn update_order(
    State(state): State<AppState>,
    body: Result<JsonBody<Order>, ApiError>,
) -> Response {
    state.render(UPDATE, update(&state, body).await)
}

pub async fn delete_order(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.render(DELETE, delete(&state, &params).await)
}

async fn create(
    state: &AppState,
    body: Result<JsonBody<Order>, ApiError>,
) -> Result<Reply, ApiError> {
    let JsonBody(order) = body?;
    let created = state
        .order_usecase
        .create_order(order.clone())
        .await
        .map_err(|err| ApiError::from(err).with_submitted(&order))?;
    Reply::with_data("Success create order", &created)
}

async fn list(state: &AppState) -> Result<Reply, ApiError> {
    let orders = state.order_usecase.list_orders().await?;
    Reply::with_data("Success get all orders", &orders)
}

async fn get(state: &AppState, id: EntityId) -> Result<Reply, ApiError> {
    let order = state.order_usecase.get_order(id).await?;
    Reply::with_data("Success get order by id", &order)
}

async fn update(
    state: &AppState,
    body: Result<JsonBody<Order>, ApiError>,
) -> Result<Reply, ApiError> {
    let JsonBody(order) = body?;
    let updated = state
        .order_usecase
        .update_order(order.clone())
        .await
        .map_err(|err| ApiError::from(err).with_submitted(&order))?;
    Reply::with_data("Success update order", &updated)
}

async fn delete(state: &AppState, params: &HashMap<String, String>) -> Result<Reply, ApiError> {
    let id = required_id(params, Resource::Order)?;
    state.order_usecase.delete_order(id).await?;
    Ok(Reply::message("Success delete the order"))
}
