use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};
use crate::validation::ValidationErrors;

/// 可预订的活动，`date` 在 JSON 中为 `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub date: NaiveDate,
}

impl Event {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title);
        errors.into_result()
    }
}

impl Entity for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
