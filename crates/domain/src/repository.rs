//! 仓储接口定义

use async_trait::async_trait;

use crate::entities::{Entity, EntityId, Event, Order, User};
use crate::errors::RepositoryResult;

/// 单一实体集合的 CRUD 仓储
///
/// 实现方负责分配 ID：新 ID 单调递增，删除后的 ID 不会被复用。
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait EntityRepository<T: Entity>: Send + Sync {
    /// 分配新 ID 并保存，返回保存后的实体
    async fn create(&self, entity: T) -> RepositoryResult<T>;

    /// 按 ID 升序返回全部实体
    async fn list(&self) -> RepositoryResult<Vec<T>>;

    async fn find_by_id(&self, id: EntityId) -> RepositoryResult<Option<T>>;

    /// 覆盖同 ID 的实体，不存在时返回 `NotFound`
    async fn update(&self, entity: T) -> RepositoryResult<T>;

    /// 删除实体，不存在时返回 `NotFound`
    async fn delete(&self, id: EntityId) -> RepositoryResult<()>;

    async fn count(&self) -> RepositoryResult<usize>;
}

pub type UserRepository = dyn EntityRepository<User>;
pub type EventRepository = dyn EntityRepository<Event>;
pub type OrderRepository = dyn EntityRepository<Order>;
