//! 领域实体定义
//!
//! 包含系统的核心实体：用户、活动、订单。

mod event;
mod order;
mod user;

pub use event::Event;
pub use order::Order;
pub use user::User;

/// 实体主键，由仓储在创建时分配，从 1 开始递增
pub type EntityId = u64;

/// 可被仓储存储的实体
pub trait Entity: Clone + Send + Sync + 'static {
    /// 用于日志与错误信息的实体名
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    fn assign_id(&mut self, id: EntityId);
}
