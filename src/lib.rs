//! Trivia - 问答游戏 REST API
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Question / Category 实体，分页窗口，出题范围
//!
//! 应用层 (application/):
//! - Ports: Question / Category Repository
//! - Commands: 创建、删除题目
//! - Queries: 分类列表、题目分页、搜索、按分类筛选、随机出题
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
