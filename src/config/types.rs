//! Configuration Types
//!
//! `config.toml` 的三个段：`[server]`、`[database]`、`[log]`。
//! 每个段都可以整体或逐项省略，缺省值见各 `Default` 实现。

use serde::Deserialize;

/// 默认监听端口，与前端开发代理约定一致
pub const DEFAULT_PORT: u16 = 5000;

/// 默认题库文件
pub const DEFAULT_DB_PATH: &str = "data/trivia.db";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

/// `[server]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[database]`：SQLite 题库
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 题库文件路径，不存在时自动创建
    pub path: String,

    pub max_connections: u32,

    /// 启动时若分类表为空，写入六个默认分类
    pub seed_categories: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DB_PATH.to_string(),
            max_connections: 5,
            seed_categories: true,
        }
    }
}

impl DatabaseConfig {
    /// sqlx 连接串（`mode=rwc` 允许新建文件）
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// `[log]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `RUST_LOG` 未设置时使用的过滤级别
    pub level: String,

    /// 输出 JSON 行，便于日志采集
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
