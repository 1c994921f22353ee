use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};
use crate::validation::ValidationErrors;

fn default_quantity() -> u32 {
    1
}

/// 用户对某个活动的订单
///
/// `date` 由用例层在创建时写入当天日期，客户端提交的值会被忽略。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub user_id: EntityId,
    #[serde(default)]
    pub event_id: EntityId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Order {
    pub fn new(user_id: EntityId, event_id: EntityId, quantity: u32) -> Self {
        Self {
            id: 0,
            user_id,
            event_id,
            quantity,
            date: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_id("user_id", self.user_id);
        errors.require_id("event_id", self.event_id);
        if self.quantity == 0 {
            errors.push("quantity", "must be at least 1");
        }
        errors.into_result()
    }

    pub fn validate_update(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        errors.require_id("id", self.id);
        errors.into_result()
    }
}

impl Entity for Order {
    const KIND: &'static str = "order";

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
