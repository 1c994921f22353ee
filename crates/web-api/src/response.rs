//! 响应封装与状态码策略
//!
//! 所有处理函数都通过 [`AppState::render`](crate::AppState::render) 输出响应，
//! 状态码只在 [`StatusPolicy`] 这一处决定。

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use config::StatusMode;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiErrorKind};

/// 统一响应结构
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

/// 处理函数的成功结果
#[derive(Debug)]
pub struct Reply {
    message: &'static str,
    data: Option<Value>,
}

impl Reply {
    pub fn message(message: &'static str) -> Self {
        Self {
            message,
            data: None,
        }
    }

    /// 序列化失败时返回内部错误
    pub fn with_data<T: Serialize>(message: &'static str, data: &T) -> Result<Self, ApiError> {
        let data = serde_json::to_value(data)
            .map_err(|err| ApiError::internal(format!("failed to encode response: {err}")))?;
        Ok(Self {
            message,
            data: Some(data),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Event,
    Order,
}

impl Resource {
    pub fn missing_id_message(self) -> &'static str {
        match self {
            Resource::User => "Invalid request payload",
            Resource::Event => "Event ID is required",
            Resource::Order => "Order ID is required",
        }
    }

    pub fn invalid_id_message(self) -> &'static str {
        match self {
            Resource::User => "Invalid id parameter",
            Resource::Event => "Invalid event ID",
            Resource::Order => "Invalid order ID",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

/// 一个端点：资源 + 操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub resource: Resource,
    pub operation: Operation,
}

impl Route {
    pub const fn new(resource: Resource, operation: Operation) -> Self {
        Self {
            resource,
            operation,
        }
    }
}

/// 日志中间件从响应扩展里读取的处理结果
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    pub message: String,
    pub method_valid: bool,
}

const CREATE_USER: Route = Route::new(Resource::User, Operation::Create);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusPolicy {
    mode: StatusMode,
}

impl StatusPolicy {
    pub fn new(mode: StatusMode) -> Self {
        Self { mode }
    }

    pub fn standard() -> Self {
        Self::new(StatusMode::Standard)
    }

    pub fn legacy() -> Self {
        Self::new(StatusMode::Legacy)
    }

    pub fn mode(&self) -> StatusMode {
        self.mode
    }

    pub fn success_status(&self, route: Route) -> StatusCode {
        if route.operation == Operation::Create {
            return StatusCode::CREATED;
        }
        match (self.mode, route.resource, route.operation) {
            (
                StatusMode::Legacy,
                Resource::User,
                Operation::List | Operation::Update | Operation::Delete,
            ) => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }

    pub fn error_status(&self, route: Route, kind: ApiErrorKind) -> StatusCode {
        if self.mode == StatusMode::Standard {
            return kind.default_status();
        }
        match kind {
            ApiErrorKind::InvalidId if route == Route::new(Resource::User, Operation::Delete) => {
                StatusCode::BAD_GATEWAY
            }
            ApiErrorKind::Validation if route == CREATE_USER => StatusCode::CREATED,
            ApiErrorKind::Validation => match route.resource {
                Resource::Event => StatusCode::INTERNAL_SERVER_ERROR,
                Resource::User | Resource::Order => StatusCode::BAD_REQUEST,
            },
            ApiErrorKind::NotFound => match route.operation {
                Operation::Update | Operation::Delete => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            _ => kind.default_status(),
        }
    }

    /// legacy 模式下只有新增用户的校验失败返回 JSON，其余错误都是纯文本
    pub fn plain_text_error(&self, route: Route, kind: ApiErrorKind) -> bool {
        self.mode == StatusMode::Legacy
            && !(kind == ApiErrorKind::Validation && route == CREATE_USER)
    }

    pub fn render(&self, route: Route, result: Result<Reply, ApiError>) -> Response {
        match result {
            Ok(reply) => {
                let status = self.success_status(route);
                let outcome = Outcome {
                    message: reply.message.to_string(),
                    method_valid: true,
                };
                let body = Envelope {
                    message: reply.message.to_string(),
                    data: reply.data,
                    errors: None,
                };
                with_outcome((status, Json(body)).into_response(), outcome)
            }
            Err(error) => {
                let status = self.error_status(route, error.kind);
                let plain_text = self.plain_text_error(route, error.kind);
                self.render_error(status, plain_text, error)
            }
        }
    }

    pub fn render_method_not_allowed(&self) -> Response {
        self.render_error(
            StatusCode::METHOD_NOT_ALLOWED,
            self.mode == StatusMode::Legacy,
            ApiError::method_not_allowed(),
        )
    }

    fn render_error(&self, status: StatusCode, plain_text: bool, error: ApiError) -> Response {
        if error.kind.is_client_error() {
            tracing::debug!(kind = ?error.kind, message = %error.message, "request rejected");
        } else {
            tracing::error!(kind = ?error.kind, message = %error.message, "request failed");
        }

        let outcome = Outcome {
            message: error.message.clone(),
            method_valid: error.kind != ApiErrorKind::MethodNotAllowed,
        };
        let response = if plain_text {
            (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                format!("{}\n", error.message),
            )
                .into_response()
        } else {
            let body = Envelope {
                message: error.message,
                data: error.data,
                errors: error.errors,
            };
            (status, Json(body)).into_response()
        };
        with_outcome(response, outcome)
    }
}

fn with_outcome(mut response: Response, outcome: Outcome) -> Response {
    response.extensions_mut().insert(outcome);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_USERS: Route = Route::new(Resource::User, Operation::List);
    const DELETE_USER: Route = Route::new(Resource::User, Operation::Delete);
    const GET_EVENT: Route = Route::new(Resource::Event, Operation::Get);
    const UPDATE_ORDER: Route = Route::new(Resource::Order, Operation::Update);
    const UPDATE_USER: Route = Route::new(Resource::User, Operation::Update);
    const CREATE_EVENT: Route = Route::new(Resource::Event, Operation::Create);

    #[test]
    fn standard_success_codes() {
        let policy = StatusPolicy::standard();
        assert_eq!(
            policy.success_status(Route::new(Resource::Event, Operation::Create)),
            StatusCode::CREATED
        );
        assert_eq!(policy.success_status(LIST_USERS), StatusCode::OK);
        assert_eq!(policy.success_status(DELETE_USER), StatusCode::OK);
        assert_eq!(policy.success_status(GET_EVENT), StatusCode::OK);
    }

    #[test]
    fn legacy_success_codes_only_differ_for_users() {
        let policy = StatusPolicy::legacy();
        assert_eq!(policy.success_status(LIST_USERS), StatusCode::CREATED);
        assert_eq!(policy.success_status(DELETE_USER), StatusCode::CREATED);
        assert_eq!(
            policy.success_status(Route::new(Resource::User, Operation::Update)),
            StatusCode::CREATED
        );
        assert_eq!(policy.success_status(GET_EVENT), StatusCode::OK);
        assert_eq!(policy.success_status(UPDATE_ORDER), StatusCode::OK);
    }

    #[test]
    fn error_codes_by_mode() {
        let standard = StatusPolicy::standard();
        let legacy = StatusPolicy::legacy();

        assert_eq!(
            standard.error_status(DELETE_USER, ApiErrorKind::InvalidId),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            legacy.error_status(DELETE_USER, ApiErrorKind::InvalidId),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            legacy.error_status(GET_EVENT, ApiErrorKind::InvalidId),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            standard.error_status(GET_EVENT, ApiErrorKind::NotFound),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            legacy.error_status(GET_EVENT, ApiErrorKind::NotFound),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            legacy.error_status(UPDATE_ORDER, ApiErrorKind::NotFound),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            standard.error_status(LIST_USERS, ApiErrorKind::Validation),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            legacy.error_status(CREATE_USER, ApiErrorKind::Validation),
            StatusCode::CREATED
        );
        assert_eq!(
            legacy.error_status(UPDATE_USER, ApiErrorKind::Validation),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            legacy.error_status(UPDATE_ORDER, ApiErrorKind::Validation),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            legacy.error_status(CREATE_EVENT, ApiErrorKind::Validation),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        for policy in [standard, legacy] {
            assert_eq!(
                policy.error_status(GET_EVENT, ApiErrorKind::MissingId),
                StatusCode::BAD_REQUEST
            );
            assert_eq!(
                policy.error_status(GET_EVENT, ApiErrorKind::Internal),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn legacy_errors_are_plain_text_except_user_create_validation() {
        let legacy = StatusPolicy::legacy();
        assert!(legacy.plain_text_error(CREATE_USER, ApiErrorKind::MalformedBody));
        assert!(!legacy.plain_text_error(CREATE_USER, ApiErrorKind::Validation));
        assert!(legacy.plain_text_error(UPDATE_USER, ApiErrorKind::Validation));
        assert!(legacy.plain_text_error(CREATE_EVENT, ApiErrorKind::Validation));
        let standard = StatusPolicy::standard();
        assert!(!standard.plain_text_error(UPDATE_USER, ApiErrorKind::Validation));
    }

    #[test]
    fn render_marks_method_not_allowed() {
        let response = StatusPolicy::standard().render_method_not_allowed();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let outcome = response.extensions().get::<Outcome>().unwrap();
        assert!(!outcome.method_valid);
        assert_eq!(outcome.message, "Invalid request method");
    }
}
