#![allow(dead_code)]

use std::sync::Arc;

use application::{
    EventService, EventServiceDependencies, FixedClock, OrderService, OrderServiceDependencies,
    UserService, UserServiceDependencies,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use domain::{Event, Order, User};
use infrastructure::InMemoryRepository;
use serde_json::{json, Value};
use tower::ServiceExt;
use web_api::{router, AppState, StatusPolicy};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// 使用内存仓储和固定日期搭建完整的路由
pub fn test_router(policy: StatusPolicy) -> Router {
    let user_service = UserService::new(UserServiceDependencies {
        user_repository: Arc::new(InMemoryRepository::<User>::new()),
    });
    let event_service = EventService::new(EventServiceDependencies {
        event_repository: Arc::new(InMemoryRepository::<Event>::new()),
    });
    let order_service = OrderService::new(OrderServiceDependencies {
        order_repository: Arc::new(InMemoryRepository::<Order>::new()),
        clock: Arc::new(FixedClock(today())),
    });

    router(AppState::new(
        Arc::new(user_service),
        Arc::new(event_service),
        Arc::new(order_service),
        policy,
    ))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(json!({}))
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    TestResponse {
        status,
        content_type,
        text: String::from_utf8(body_bytes.to_vec()).expect("utf8 body"),
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn budi() -> Value {
    json!({
        "name": "Budi",
        "email": "budi@example.com",
        "phone": "08123456789"
    })
}

pub fn jazz_night() -> Value {
    json!({
        "title": "Java Jazz",
        "description": "three nights of jazz",
        "location": "Jakarta",
        "date": "2026-03-01"
    })
}
