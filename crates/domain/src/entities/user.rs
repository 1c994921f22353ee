use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};
use crate::validation::{is_valid_email, ValidationErrors};

/// 平台用户
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
}

impl User {
    /// 创建时的字段校验
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        if self.email.trim().is_empty() {
            errors.push("email", "is required");
        } else if !is_valid_email(&self.email) {
            errors.push("email", "is not a valid email address");
        }
        errors.into_result()
    }

    /// 更新时额外要求携带 ID
    pub fn validate_update(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        errors.require_id("id", self.id);
        errors.into_result()
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budi() -> User {
        User {
            id: 0,
            name: "Budi".into(),
            email: "budi@example.com".into(),
            phone: "08123456789".into(),
            address: String::new(),
        }
    }

    #[test]
    fn valid_user_passes() {
        assert!(budi().validate().is_ok());
    }

    #[test]
    fn missing_name_and_bad_email_are_both_reported() {
        let user = User {
            name: " ".into(),
            email: "not-an-email".into(),
            ..budi()
        };
        let errors = user.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_field("name"));
        assert!(errors.contains_field("email"));
    }

    #[test]
    fn update_requires_id() {
        let errors = budi().validate_update().unwrap_err();
        assert!(errors.contains_field("id"));

        let user = User { id: 3, ..budi() };
        assert!(user.validate_update().is_ok());
    }

    #[test]
    fn optional_fields_are_omitted_when_empty() {
        let user = User {
            phone: String::new(),
            ..budi()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("address").is_none());
        assert_eq!(json["email"], "budi@example.com");
    }
}
