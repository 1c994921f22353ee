//! 进程内存仓储
//!
//! 以 `RwLock<BTreeMap>` 保存实体，ID 由原子计数器分配，
//! 并发创建不会产生重复 ID。进程退出后数据即丢失。

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use domain::{Entity, EntityId, EntityRepository, RepositoryError, RepositoryResult};
use tokio::sync::RwLock;
use tracing::debug;

pub struct InMemoryRepository<T: Entity> {
    records: RwLock<BTreeMap<EntityId, T>>,
    next_id: AtomicU64,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn allocate_id(&self) -> EntityId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityRepository<T> for InMemoryRepository<T> {
    async fn create(&self, mut entity: T) -> RepositoryResult<T> {
        let id = self.allocate_id();
        entity.assign_id(id);

        let mut guard = self.records.write().await;
        guard.insert(id, entity.clone());
        debug!(entity = T::KIND, id, total = guard.len(), "entity created");
        Ok(entity)
    }

    async fn list(&self) -> RepositoryResult<Vec<T>> {
        let guard = self.records.read().await;
        Ok(guard.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> RepositoryResult<Option<T>> {
        let guard = self.records.read().await;
        Ok(guard.get(&id).cloned())
    }

    async fn update(&self, entity: T) -> RepositoryResult<T> {
        let id = entity.id();
        let mut guard = self.records.write().await;
        match guard.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                debug!(entity = T::KIND, id, "entity updated");
                Ok(entity)
            }
            None => Err(RepositoryError::not_found(T::KIND, id)),
        }
    }

    async fn delete(&self, id: EntityId) -> RepositoryResult<()> {
        let mut guard = self.records.write().await;
        match guard.remove(&id) {
            Some(_) => {
                debug!(entity = T::KIND, id, "entity deleted");
                Ok(())
            }
            None => Err(RepositoryError::not_found(T::KIND, id)),
        }
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.records.read().await.len())
    }
}
