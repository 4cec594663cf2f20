//! Trivia - 问答游戏 REST API

use std::sync::Arc;

use trivia::config::{load_config, print_config, LogConfig};
use trivia::infrastructure::http::{AppState, HttpServer, ServerConfig};
use trivia::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, seed_default_categories, DatabaseConfig,
    SqliteCategoryRepository, SqliteQuestionRepository,
};

/// 初始化日志，`RUST_LOG` 优先于配置文件中的级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},trivia={},tower_http=debug", log.level, log.level);
    let builder = tracing_subscriber::fmt().with_env_filter(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
    );

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Trivia API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;
    if config.database.seed_categories {
        seed_default_categories(&pool).await?;
    }

    // 创建 Repository 适配器
    let question_repo = Arc::new(SqliteQuestionRepository::new(pool.clone()));
    let category_repo = Arc::new(SqliteCategoryRepository::new(pool.clone()));

    let state = AppState::new(question_repo, category_repo);
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server.run_with_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
