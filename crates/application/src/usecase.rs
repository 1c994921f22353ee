//! 用例接口
//!
//! Web 层只依赖这些 trait，便于在测试中替换为 mock。

use async_trait::async_trait;
use domain::{EntityId, Event, Order, User};

use crate::error::ApplicationResult;

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait UserUsecase: Send + Sync {
    async fn create_user(&self, user: User) -> ApplicationResult<User>;
    async fn list_users(&self) -> ApplicationResult<Vec<User>>;
    async fn get_user(&self, id: EntityId) -> ApplicationResult<User>;
    async fn update_user(&self, user: User) -> ApplicationResult<User>;
    async fn delete_user(&self, id: EntityId) -> ApplicationResult<()>;
}

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait EventUsecase: Send + Sync {
    async fn create_event(&self, event: Event) -> ApplicationResult<Event>;
    async fn list_events(&self) -> ApplicationResult<Vec<Event>>;
    async fn get_event(&self, id: EntityId) -> ApplicationResult<Event>;
}

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait OrderUsecase: Send + Sync {
    async fn create_order(&self, order: Order) -> ApplicationResult<Order>;
    async fn list_orders(&self) -> ApplicationResult<Vec<Order>>;
    async fn get_order(&self, id: EntityId) -> ApplicationResult<Order>;
    async fn update_order(&self, order: Order) -> ApplicationResult<Order>;
    async fn delete_order(&self, id: EntityId) -> ApplicationResult<()>;
}
