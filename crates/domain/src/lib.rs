//! 票务预订系统核心领域模型
//!
//! 包含用户、活动、订单实体，字段校验规则，以及仓储接口。

pub mod entities;
pub mod errors;
pub mod repository;
pub mod validation;

// 重新导出常用类型
pub use entities::*;
pub use errors::*;
pub use repository::*;
pub use validation::*;
