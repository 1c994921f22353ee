use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::RepositoryError;
use serde::Serialize;
use serde_json::Value;

use crate::response::Envelope;

/// 错误分类，最终状态码由 [`StatusPolicy`](crate::StatusPolicy) 决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    MethodNotAllowed,
    MalformedBody,
    MissingId,
    InvalidId,
    Validation,
    NotFound,
    Internal,
}

impl ApiErrorKind {
    pub fn is_client_error(self) -> bool {
        !matches!(self, ApiErrorKind::Internal)
    }

    /// 标准模式下的状态码
    pub fn default_status(self) -> StatusCode {
        match self {
            ApiErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorKind::MalformedBody
            | ApiErrorKind::MissingId
            | ApiErrorKind::InvalidId
            | ApiErrorKind::Validation => StatusCode::BAD_REQUEST,
            ApiErrorKind::NotFound => StatusCode::NOT_FOUND,
            ApiErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub errors: Option<Value>,
    pub data: Option<Value>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: None,
            data: None,
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::new(ApiErrorKind::MethodNotAllowed, "Invalid request method")
    }

    pub fn malformed_body() -> Self {
        Self::new(ApiErrorKind::MalformedBody, "invalid request body")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Internal, message)
    }

    /// 把提交的实体附在校验失败的响应里，其余错误忽略
    pub fn with_submitted<T: Serialize>(mut self, submitted: &T) -> Self {
        if self.kind == ApiErrorKind::Validation {
            self.data = serde_json::to_value(submitted).ok();
        }
        self
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Validation(errors) => ApiError {
                kind: ApiErrorKind::Validation,
                message: "invalid request body".to_string(),
                errors: serde_json::to_value(&errors).ok(),
                data: None,
            },
            ApplicationError::Repository(err @ RepositoryError::NotFound { .. }) => {
                ApiError::new(ApiErrorKind::NotFound, err.to_string())
            }
            ApplicationError::Repository(err @ RepositoryError::Storage { .. }) => {
                ApiError::internal(err.to_string())
            }
        }
    }
}

/// 未经过 `StatusPolicy` 的错误（例如提取器拒绝）按标准模式输出
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.default_status();
        let body = Envelope {
            message: self.message,
            data: self.data,
            errors: self.errors,
        };
        (status, Json(body)).into_response()
    }
}
