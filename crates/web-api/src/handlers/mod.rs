//! 各资源的 HTTP 处理函数
//!
//! 每个处理函数都是一条线性的检查流程：解析请求体或 `id` 参数、
//! 调用用例、再交给 `AppState::render` 生成响应。

pub mod events;
pub mod orders;
pub mod users;
