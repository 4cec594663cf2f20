//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现
//! - http: axum RESTful API
//! - persistence: SQLite 仓储

pub mod http;
pub mod persistence;
