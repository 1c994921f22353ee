use std::sync::Arc;

use application::{EventUsecase, OrderUsecase, UserUsecase};
use axum::response::Response;

use crate::{
    error::ApiError,
    response::{Reply, Route, StatusPolicy},
};

#[derive(Clone)]
pub struct AppState {
    pub user_usecase: Arc<dyn UserUsecase>,
    pub event_usecase: Arc<dyn EventUsecase>,
    pub order_usecase: Arc<dyn OrderUsecase>,
    pub status_policy: StatusPolicy,
}

impl AppState {
    pub fn new(
        user_usecase: Arc<dyn UserUsecase>,
        event_usecase: Arc<dyn EventUsecase>,
        order_usecase: Arc<dyn OrderUsecase>,
        status_policy: StatusPolicy,
    ) -> Self {
        Self {
            user_usecase,
            event_usecase,
            order_usecase,
            status_policy,
        }
    }

    pub fn render(&self, route: Route, result: Result<Reply, ApiError>) -> Response {
        self.status_policy.render(route, result)
    }
}
