use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 默认配置文件名 (当前目录下 receipts.toml，可选)
const DEFAULT_CONFIG_FILE: &str = "receipts";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            log: LogConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> receipts.toml (可选) -> 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("log.level", std::env::var("LOG_LEVEL").ok())?
            .build()?
            .try_deserialize()
    }

    /// 从指定文件加载配置，不读取环境变量
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let default = Self::default();
        Config::builder()
            .set_default("server.host", default.server.host)?
            .set_default("server.port", i64::from(default.server.port))?
            .set_default("log.level", default.log.level)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
