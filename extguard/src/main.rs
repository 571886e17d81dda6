mod config;
mod error;
mod server;

use crate::config::{Config, LoggingConfig};
use crate::error::{AppError, Result};
use extguard_infra::DatabaseManager;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| AppError::Internal(format!("Failed to set tracing subscriber: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    init_tracing(&config.logging)?;
    info!("Starting extguard...");
    info!("Configuration loaded successfully");

    // 初始化数据库连接
    let db_manager = DatabaseManager::new(config.database.connect_options()).await?;
    db_manager.ensure_schema().await?;
    info!("Database connection established");

    info!(
        "Registry policy - fixed extensions: {:?}, label limit: {}",
        config.registry.fixed_extensions, config.registry.label_limit
    );

    // 初始化应用状态
    let app_state = server::init_app_state(&db_manager, config.registry.clone())?;
    let app = server::create_app(app_state);
    info!("Router created");

    // 启动HTTP服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("extguard stopped");
    Ok(())
}
