//! 实体字段校验
//!
//! 每个实体提供显式的 `validate` 方法，返回结构化的字段错误列表，
//! 由用例层在写入仓储前调用。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 单个字段的校验失败信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 一次校验收集到的全部字段错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// 字段为空（或只有空白）时记录 `is required`
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "is required");
        }
    }

    /// 数值型 ID 为 0 时记录 `is required`
    pub fn require_id(&mut self, field: &str, value: u64) {
        if value == 0 {
            self.push(field, "is required");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// 没有错误时返回 `Ok(())`，否则把自身作为错误返回
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// 粗粒度的邮箱格式检查：恰好一个 `@`，两侧都非空，域名部分含 `.`
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_blank_values() {
        let mut errors = ValidationErrors::new();
        errors.require("name", "   ");
        errors.require("title", "concert");
        errors.require_id("user_id", 0);
        errors.require_id("event_id", 7);

        assert_eq!(errors.len(), 2);
        assert!(errors.contains_field("name"));
        assert!(errors.contains_field("user_id"));
        assert!(!errors.contains_field("title"));
    }

    #[test]
    fn display_joins_all_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "is required");
        errors.push("email", "is invalid");
        assert_eq!(errors.to_string(), "name: is required; email: is invalid");
    }

    #[test]
    fn serializes_as_plain_list() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "field": "name", "message": "is required" }])
        );
    }

    #[test]
    fn email_check() {
        assert!(is_valid_email("budi@example.com"));
        assert!(!is_valid_email("budi.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("budi@"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("budi@localhost"));
    }
}
