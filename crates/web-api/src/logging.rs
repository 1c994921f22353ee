use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::response::Outcome;

/// 每个请求记录一条日志：方法、路径、状态码、耗时以及处理结果
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = response.status().as_u16();
    let (message, method_valid) = response
        .extensions()
        .get::<Outcome>()
        .map(|outcome| (outcome.message.as_str(), outcome.method_valid))
        .unwrap_or(("", true));

    if status >= 500 {
        tracing::error!(
            http.method = %method,
            http.path = %path,
            http.status.code = status,
            method_valid,
            elapsed_ms,
            "{message}"
        );
    } else if status >= 400 {
        tracing::warn!(
            http.method = %method,
            http.path = %path,
            http.status.code = status,
            method_valid,
            elapsed_ms,
            "{message}"
        );
    } else {
        tracing::info!(
            http.method = %method,
            http.path = %path,
            http.status.code = status,
            method_valid,
            elapsed_ms,
            "{message}"
        );
    }

    response
}
