//! 统一配置中心
//!
//! 提供应用的全局配置管理，包括：
//! - 监听地址
//! - HTTP 状态码策略
//! - 日志过滤

use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务配置
    pub server: ServerConfig,
    /// HTTP 响应配置
    #[serde(default)]
    pub http: HttpConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 成功与错误响应使用哪一套状态码
///
/// `legacy` 复现旧接口的行为：列表、更新、删除用户返回 201，
/// 校验失败返回 201，错误正文为纯文本。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusMode {
    #[default]
    Standard,
    Legacy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub status_mode: StatusMode,
}

/// 日志配置，`RUST_LOG` 存在时优先使用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            http: HttpConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// 加载配置，优先级：默认值 -> 可选文件（APP_CONFIG_FILE）-> 环境变量（APP_*）
    ///
    /// 嵌套字段用双下划线分隔，例如 `APP_SERVER__PORT=9000`、
    /// `APP_HTTP__STATUS_MODE=legacy`。
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));
        if let Ok(path) = std::env::var("APP_CONFIG_FILE") {
            if path.ends_with(".yml") || path.ends_with(".yaml") {
                figment = figment.merge(Yaml::file(path));
            } else {
                figment = figment.merge(Toml::file(path));
            }
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config: AppConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidServerConfig(
                "Server host cannot be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidServerPort(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::InvalidLogConfig(
                "Log filter cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// 监听地址，形如 `127.0.0.1:8080`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("Invalid server port: {0}")]
    InvalidServerPort(String),
    #[error("Invalid server configuration: {0}")]
    InvalidServerConfig(String),
    #[error("Invalid log configuration: {0}")]
    InvalidLogConfig(String),
}
