//! Web API 层。
//!
//! 提供 Axum 路由，将 HTTP 请求委托给应用层的用例服务，
//! 并以统一的 `{message, data, errors}` 结构返回结果。

mod error;
mod extract;
mod handlers;
mod logging;
mod response;
mod routes;
mod state;

pub use error::{ApiError, ApiErrorKind};
pub use response::{Envelope, Operation, Reply, Resource, Route, StatusPolicy};
pub use routes::router;
pub use state::AppState;
