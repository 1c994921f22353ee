//! 领域模型错误定义

use thiserror::Error;

use crate::entities::EntityId;

/// 仓储层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// 按 ID 查找的记录不存在
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    /// 存储本身不可用
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: EntityId) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// 仓储操作结果类型
pub type RepositoryResult<T> = Result<T, RepositoryError>;
