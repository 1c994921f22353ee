use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Response,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{events, orders, users},
    logging::log_request,
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/events",
            get(events::get_events)
                .post(events::create_event)
                .fallback(method_not_allowed),
        )
        .route(
            "/users",
            get(users::get_users)
                .post(users::create_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(orders::get_orders)
                .post(orders::create_order)
                .put(orders::update_order)
                .delete(orders::delete_order)
                .fallback(method_not_allowed),
        )
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed(State(state): State<AppState>) -> Response {
    state.status_policy.render_method_not_allowed()
}
