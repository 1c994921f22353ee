use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use domain::EntityId;
use serde::de::DeserializeOwned;

use crate::{
    error::{ApiError, ApiErrorKind},
    response::Resource,
};

/// 不检查 `Content-Type`，直接按 JSON 解析请求体
///
/// 解析失败统一返回 `invalid request body`。
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!(error = %err, "failed to read request body");
            ApiError::malformed_body()
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
            tracing::debug!(error = %err, "failed to decode request body");
            ApiError::malformed_body()
        })
    }
}

/// 查询参数中的 `id`
///
/// 返回 `None` 表示请求没有携带 `id`。
pub fn optional_id(
    params: &HashMap<String, String>,
    resource: Resource,
) -> Option<Result<EntityId, ApiError>> {
    params.get("id").map(|raw| parse_id(raw, resource))
}

/// 必须携带 `id` 的端点
pub fn required_id(
    params: &HashMap<String, String>,
    resource: Resource,
) -> Result<EntityId, ApiError> {
    optional_id(params, resource).unwrap_or_else(|| Err(missing_id(resource)))
}

fn parse_id(raw: &str, resource: Resource) -> Result<EntityId, ApiError> {
    if raw.is_empty() {
        return Err(missing_id(resource));
    }
    raw.parse::<EntityId>()
        .map_err(|_| ApiError::new(ApiErrorKind::InvalidId, resource.invalid_id_message()))
}

fn missing_id(resource: Resource) -> ApiError {
    ApiError::new(ApiErrorKind::MissingId, resource.missing_id_message())
}
