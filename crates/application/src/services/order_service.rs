use std::sync::Arc;

use async_trait::async_trait;
use domain::{EntityId, Order, OrderRepository, RepositoryError};
use tracing::{debug, info};

use crate::{
    clock::Clock,
    error::{ApplicationError, ApplicationResult},
    usecase::OrderUsecase,
};

pub struct OrderServiceDependencies {
    pub order_repository: Arc<OrderRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct OrderService {
    deps: OrderServiceDependencies,
}

impl OrderService {
    pub fn new(deps: OrderServiceDependencies) -> Self {
        Self { deps }
    }

    async fn find(&self, id: EntityId) -> ApplicationResult<Order> {
        self.deps
            .order_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::from(RepositoryError::not_found("order", id)))
    }
}

#[async_trait]
impl OrderUsecase for OrderService {
    async fn create_order(&self, mut order: Order) -> ApplicationResult<Order> {
        order.validate()?;

        order.date = Some(self.deps.clock.today());
        let stored = self.deps.order_repository.create(order).await?;
        info!(
            order_id = stored.id,
            user_id = stored.user_id,
            event_id = stored.event_id,
            "order created"
        );
        Ok(stored)
    }

    async fn list_orders(&self) -> ApplicationResult<Vec<Order>> {
        let orders = self.deps.order_repository.list().await?;
        debug!(count = orders.len(), "orders listed");
        Ok(orders)
    }

    async fn get_order(&self, id: EntityId) -> ApplicationResult<Order> {
        self.find(id).await
    }

    async fn update_order(&self, mut order: Order) -> ApplicationResult<Order> {
        order.validate_update()?;

        // 创建日期不随更新改变
        let existing = self.find(order.id).await?;
        order.date = existing.date;

        let stored = self.deps.order_repository.update(order).await?;
        info!(order_id = stored.id, "order updated");
        Ok(stored)
    }

    async fn delete_order(&self, id: EntityId) -> ApplicationResult<()> {
        self.deps.order_repository.delete(id).await?;
        info!(order_id = id, "order deleted");
        Ok(())
    }
}
